//! Mini-game player components.

use bevy_ecs::prelude::Component;

/// Marker for the single player entity of a mini-game session.
#[derive(Component, Clone, Copy, Debug)]
pub struct MiniPlayer;

/// Pending landing after a runner jump.
///
/// Counts down once per tick; when it reaches zero the player drops back by
/// the jump height and the component is removed.
#[derive(Component, Clone, Copy, Debug)]
pub struct JumpLanding {
    pub ticks_left: u32,
}

impl JumpLanding {
    pub fn new(ticks: u32) -> Self {
        JumpLanding { ticks_left: ticks }
    }
}
