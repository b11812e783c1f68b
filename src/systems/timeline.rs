//! Timeline playback system.
use bevy_ecs::prelude::*;

use crate::resources::timeline::Timeline;

/// Advance the playhead by one frame while playing.
pub fn timeline_playback(mut timeline: ResMut<Timeline>) {
    timeline.advance_frame();
}

pub fn timeline_is_playing(timeline: Res<Timeline>) -> bool {
    timeline.is_playing()
}
