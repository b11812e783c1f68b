//! Mini-game player controller.
//!
//! Held directional keys move the player every tick in percentage space,
//! clamped to [`PLAYER_MIN`, `PLAYER_MAX`]. Vertical movement is only allowed
//! for game types that fly or shoot. The action key acts once per press:
//! runners jump and land a few ticks later, shooters fire a projectile while
//! they have ammo.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::{Actor, ActorKind};
use crate::components::fieldposition::FieldPosition;
use crate::components::player::{JumpLanding, MiniPlayer};
use crate::events::audio::AudioCue;
use crate::events::input::InputAction;
use crate::resources::input::{InputBindings, InputState};
use crate::resources::session::{AuxState, GameType, Session};
use crate::resources::spawner::SpawnerState;
use crate::resources::worldtime::WorldTime;

pub const PLAYER_MIN: f32 = 5.0;
pub const PLAYER_MAX: f32 = 95.0;
/// Height of a runner jump.
pub const JUMP_HEIGHT: f32 = 15.0;
/// Highest point a runner can jump to.
pub const JUMP_CEILING: f32 = 20.0;
/// Runner ground line.
pub const RUNNER_GROUND: f32 = 80.0;
/// Ticks spent in the air.
pub const JUMP_TICKS: u32 = 4;
pub const PROJECTILE_SPEED: f32 = 8.0;
/// Projectiles appear this far above the player.
pub const PROJECTILE_OFFSET: f32 = 5.0;

#[allow(clippy::too_many_arguments)]
pub fn minigame_player_controller(
    mut commands: Commands,
    mut player: Query<(Entity, &mut FieldPosition, Option<&mut JumpLanding>), With<MiniPlayer>>,
    input: Res<InputState>,
    bindings: Res<InputBindings>,
    time: Res<WorldTime>,
    mut session: ResMut<Session>,
    mut spawner: ResMut<SpawnerState>,
    mut cues: MessageWriter<AudioCue>,
) {
    let Ok((entity, mut position, landing)) = player.single_mut() else {
        return;
    };
    let game_type = session.game_type;
    let step = game_type.player_step();

    let mut x = position.x;
    let mut y = position.y;
    if input.action_active(&bindings, InputAction::Left) {
        x -= step;
    }
    if input.action_active(&bindings, InputAction::Right) {
        x += step;
    }
    if game_type.allows_vertical_movement() {
        if input.action_active(&bindings, InputAction::Up) {
            y -= step;
        }
        if input.action_active(&bindings, InputAction::Down) {
            y += step;
        }
    }
    x = x.clamp(PLAYER_MIN, PLAYER_MAX);
    y = y.clamp(PLAYER_MIN, PLAYER_MAX);

    let airborne = match landing {
        Some(mut landing) => {
            landing.ticks_left = landing.ticks_left.saturating_sub(1);
            if landing.ticks_left == 0 {
                y = (y + JUMP_HEIGHT).min(RUNNER_GROUND);
                commands.entity(entity).remove::<JumpLanding>();
                false
            } else {
                true
            }
        }
        None => false,
    };

    if input.action_just_pressed(&bindings, InputAction::Action) {
        match game_type {
            GameType::Running if !airborne => {
                y = (y - JUMP_HEIGHT).max(JUMP_CEILING);
                commands.entity(entity).insert(JumpLanding::new(JUMP_TICKS));
                if session.sound_enabled {
                    cues.write(AudioCue::Jump);
                }
            }
            GameType::Shooting => {
                let fired = match &mut session.aux {
                    AuxState::Shooting { ammo, .. } if *ammo > 0 => {
                        *ammo -= 1;
                        true
                    }
                    _ => false,
                };
                if fired {
                    let id = spawner.next_id();
                    commands.spawn((
                        Actor::new(id, ActorKind::Projectile, PROJECTILE_SPEED, time.frame_count),
                        FieldPosition::new(x, y - PROJECTILE_OFFSET),
                    ));
                    if session.sound_enabled {
                        cues.write(AudioCue::Shoot);
                    }
                } else {
                    debug!("out of ammo");
                }
            }
            _ => {}
        }
    }

    if position.x != x || position.y != y {
        position.x = x;
        position.y = y;
    }
}
