//! Collision and scoring resolver.
//!
//! One pass per tick over the actors near the player, with no spatial
//! partitioning. Hazards cost a life, collectibles score and refill; either
//! way the actor is removed. Projectiles are never resolved against the
//! player, and an actor spawned this tick waits for the next one.
//!
//! Losing the last life flips [`GameState`] to game over inside this system,
//! triggers [`GameOverEvent`] and stops the sweep.
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::actor::{Actor, ActorKind};
use crate::components::fieldposition::FieldPosition;
use crate::components::player::MiniPlayer;
use crate::events::audio::AudioCue;
use crate::events::gamestate::GameOverEvent;
use crate::resources::gameconfig::SimConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::session::Session;
use crate::resources::worldtime::WorldTime;

#[allow(clippy::too_many_arguments)]
pub fn collision_resolver(
    mut commands: Commands,
    player: Query<&FieldPosition, With<MiniPlayer>>,
    actors: Query<(Entity, &Actor, &FieldPosition), Without<MiniPlayer>>,
    config: Res<SimConfig>,
    time: Res<WorldTime>,
    mut session: ResMut<Session>,
    mut state: ResMut<GameState>,
    mut cues: MessageWriter<AudioCue>,
) {
    let Ok(player_position) = player.single() else {
        return;
    };

    let mut hits: Vec<(Entity, Actor)> = actors
        .iter()
        .filter(|(_, actor, _)| actor.kind != ActorKind::Projectile)
        .filter(|(_, actor, _)| actor.spawned_tick != time.frame_count)
        .filter(|(_, _, position)| position.distance(player_position) < config.hit_radius)
        .map(|(entity, actor, _)| (entity, *actor))
        .collect();
    // Resolve in spawn order.
    hits.sort_by_key(|(_, actor)| actor.id);

    for (entity, actor) in hits {
        commands.entity(entity).despawn();
        if actor.kind.is_hazard() {
            let ended = session.lose_life();
            debug!("hit by actor {}, {} lives left", actor.id, session.lives);
            if session.sound_enabled {
                cues.write(AudioCue::Damage);
            }
            if ended {
                state.set(GameStates::GameOver);
                info!("last life lost on tick {}", time.frame_count);
                commands.trigger(GameOverEvent {
                    final_score: session.score,
                    tick: time.frame_count,
                });
                break;
            }
        } else {
            let points = session.game_type.collect_points();
            session.add_score(points);
            session.aux.refill();
            debug!("collected actor {} for {} points", actor.id, points);
            if session.sound_enabled {
                cues.write(AudioCue::Collect);
            }
        }
    }
}
