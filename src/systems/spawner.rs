//! Procedural actor spawner.
//!
//! Once per tick the spawner rolls a uniform value and spawns one actor when
//! it is below `spawn_rate * game_speed`. As the game speed ramps up, so does
//! the spawn probability.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::{Actor, ActorKind};
use crate::components::fieldposition::FieldPosition;
use crate::resources::gameconfig::SimConfig;
use crate::resources::session::{GameType, Session};
use crate::resources::spawner::SpawnerState;
use crate::resources::worldtime::WorldTime;

/// Spawn row just above the visible band.
pub const SPAWN_ABOVE_TOP: f32 = -5.0;
/// Runner actors enter at the trailing horizontal edge.
pub const RUNNER_SPAWN_X: f32 = 100.0;

/// Roll position, kind and base speed for a new actor of `game_type`.
///
/// Runners get obstacles (80%) or collectibles at the right edge, at a random
/// height. Every other type gets hazards (70%) or collectibles across the top
/// edge; flying hazards are obstacles, the rest are enemies.
pub fn roll_actor(spawner: &mut SpawnerState, game_type: GameType) -> (FieldPosition, ActorKind, f32) {
    let (position, kind) = match game_type {
        GameType::Running => {
            let y = spawner.roll() * 60.0 + 20.0;
            let kind = if spawner.roll() < 0.8 {
                ActorKind::Obstacle
            } else {
                ActorKind::Collectible
            };
            (FieldPosition::new(RUNNER_SPAWN_X, y), kind)
        }
        _ => {
            let x = spawner.roll() * 80.0 + 10.0;
            let hazard = if game_type == GameType::Flying {
                ActorKind::Obstacle
            } else {
                ActorKind::Enemy
            };
            let kind = if spawner.roll() < 0.7 {
                hazard
            } else {
                ActorKind::Collectible
            };
            (FieldPosition::new(x, SPAWN_ABOVE_TOP), kind)
        }
    };
    let speed = spawner.roll() * 2.0 + 1.0;
    (position, kind, speed)
}

pub fn actor_spawner(
    mut commands: Commands,
    mut spawner: ResMut<SpawnerState>,
    session: Res<Session>,
    config: Res<SimConfig>,
    time: Res<WorldTime>,
) {
    if spawner.roll() >= config.spawn_rate * session.game_speed {
        return;
    }
    let (position, kind, speed) = roll_actor(&mut spawner, session.game_type);
    let id = spawner.next_id();
    debug!(
        "spawn actor {} {:?} at ({:.1}, {:.1}) speed {:.2}",
        id, kind, position.x, position.y, speed
    );
    commands.spawn((Actor::new(id, kind, speed, time.frame_count), position));
}
