//! Timeline loop.
//!
//! Independent of the editor and mini-game loops; it may tick alongside
//! either. One tick is one playback frame, `1/fps` seconds of timeline time.

use bevy_ecs::prelude::*;
use std::time::Duration;

use crate::resources::gameconfig::SimConfig;
use crate::resources::timeline::{TrackSample, Timeline};
use crate::snapshot::{TimelineSnapshot, timeline_snapshot};
use crate::systems::timeline::{timeline_is_playing, timeline_playback};

pub struct TimelineLoop {
    world: World,
    schedule: Schedule,
}

impl TimelineLoop {
    /// Timeline with the starter tracks, sized from the config.
    pub fn new(config: &SimConfig) -> Self {
        Self::with_timeline(Timeline::with_default_tracks(
            config.timeline_duration,
            config.timeline_fps,
        ))
    }

    pub fn with_timeline(timeline: Timeline) -> Self {
        let mut world = World::new();
        world.insert_resource(timeline);
        let mut schedule = Schedule::default();
        schedule.add_systems(timeline_playback.run_if(timeline_is_playing));
        TimelineLoop { world, schedule }
    }

    pub fn tick(&mut self) {
        self.schedule.run(&mut self.world);
    }

    pub fn tick_interval(&self) -> Duration {
        self.timeline().tick_interval()
    }

    pub fn timeline(&self) -> &Timeline {
        self.world.resource::<Timeline>()
    }

    pub fn timeline_mut(&mut self) -> Mut<'_, Timeline> {
        self.world.resource_mut::<Timeline>()
    }

    pub fn is_playing(&self) -> bool {
        self.timeline().is_playing()
    }

    pub fn samples(&self) -> Vec<TrackSample> {
        self.timeline().sample_all()
    }

    pub fn snapshot(&self) -> TimelineSnapshot {
        timeline_snapshot(self.timeline())
    }
}
