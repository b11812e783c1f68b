//! Transient mini-game actors.
//!
//! Actors are spawned by [`crate::systems::spawner`], moved by
//! [`crate::systems::actormovement`] and removed either when they leave the
//! visible band or when [`crate::systems::collision`] resolves them against
//! the player. Their position is a
//! [`FieldPosition`](super::fieldposition::FieldPosition).

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    Enemy,
    Collectible,
    Obstacle,
    Projectile,
}

impl ActorKind {
    /// Enemies and obstacles cost a life on contact.
    pub fn is_hazard(self) -> bool {
        matches!(self, ActorKind::Enemy | ActorKind::Obstacle)
    }
}

#[derive(Component, Clone, Copy, Debug)]
pub struct Actor {
    /// Monotonically increasing id, never reused within a session.
    pub id: u64,
    pub kind: ActorKind,
    /// Base speed in percentage units per tick, scaled by the game speed.
    pub speed: f32,
    /// Tick on which the actor was spawned. Collision skips actors on their
    /// spawn tick.
    pub spawned_tick: u64,
}

impl Actor {
    pub fn new(id: u64, kind: ActorKind, speed: f32, spawned_tick: u64) -> Self {
        Actor {
            id,
            kind,
            speed,
            spawned_tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hazards() {
        assert!(ActorKind::Enemy.is_hazard());
        assert!(ActorKind::Obstacle.is_hazard());
        assert!(!ActorKind::Collectible.is_hazard());
        assert!(!ActorKind::Projectile.is_hazard());
    }
}
