//! Actor movement.
//!
//! Moves every actor by its game-type rule, scaled by the session game speed,
//! and despawns actors that left the visible band. Actors are never moved
//! back in.
//!
//! | game type | rule                                   | kept while        |
//! |-----------|----------------------------------------|-------------------|
//! | shooting  | projectiles rise, everything else falls | -10 < y < 110    |
//! | running   | move left                              | x > -10           |
//! | flying    | move left, obstacles wobble vertically | x > -10           |
//! | others    | fall                                   | y < 110           |
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::actor::{Actor, ActorKind};
use crate::components::fieldposition::FieldPosition;
use crate::resources::session::{GameType, Session};
use crate::resources::worldtime::WorldTime;

pub const BAND_MIN: f32 = -10.0;
pub const BAND_MAX: f32 = 110.0;

/// Vertical drift of a flying obstacle at `elapsed_ms`.
pub fn obstacle_wobble(elapsed_ms: f32) -> f32 {
    (elapsed_ms * 0.01).sin() * 0.5
}

pub fn actor_movement(
    mut commands: Commands,
    mut actors: Query<(Entity, &Actor, &mut FieldPosition)>,
    session: Res<Session>,
    time: Res<WorldTime>,
) {
    let game_speed = session.game_speed;
    let wobble = obstacle_wobble(time.elapsed_ms());
    for (entity, actor, mut position) in actors.iter_mut() {
        let step = actor.speed * game_speed;
        let keep = match session.game_type {
            GameType::Shooting => {
                if actor.kind == ActorKind::Projectile {
                    position.y -= step;
                } else {
                    position.y += step;
                }
                position.y > BAND_MIN && position.y < BAND_MAX
            }
            GameType::Running => {
                position.x -= step;
                position.x > BAND_MIN
            }
            GameType::Flying => {
                position.x -= step;
                if actor.kind == ActorKind::Obstacle {
                    position.y += wobble;
                }
                position.x > BAND_MIN
            }
            _ => {
                position.y += step;
                position.y < BAND_MAX
            }
        };
        if !keep {
            trace!("actor {} left the field", actor.id);
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_world(game_type: GameType) -> World {
        let mut world = World::new();
        world.insert_resource(Session::new(game_type, 3));
        world.insert_resource(WorldTime::default());
        world
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(actor_movement);
        schedule.run(world);
    }

    #[test]
    fn test_shooting_enemy_falls_projectile_rises() {
        let mut world = make_world(GameType::Shooting);
        let enemy = world
            .spawn((Actor::new(1, ActorKind::Enemy, 2.0, 0), FieldPosition::new(50.0, 10.0)))
            .id();
        let shot = world
            .spawn((
                Actor::new(2, ActorKind::Projectile, 8.0, 0),
                FieldPosition::new(50.0, 45.0),
            ))
            .id();
        tick(&mut world);
        assert_eq!(world.get::<FieldPosition>(enemy).unwrap().y, 12.0);
        assert_eq!(world.get::<FieldPosition>(shot).unwrap().y, 37.0);
    }

    #[test]
    fn test_game_speed_scales_step() {
        let mut world = make_world(GameType::Running);
        world.resource_mut::<Session>().game_speed = 2.0;
        let e = world
            .spawn((Actor::new(1, ActorKind::Obstacle, 1.5, 0), FieldPosition::new(100.0, 50.0)))
            .id();
        tick(&mut world);
        assert_eq!(world.get::<FieldPosition>(e).unwrap().x, 97.0);
    }

    #[test]
    fn test_runner_actor_removed_past_left_edge() {
        let mut world = make_world(GameType::Running);
        let e = world
            .spawn((Actor::new(1, ActorKind::Obstacle, 3.0, 0), FieldPosition::new(-8.0, 50.0)))
            .id();
        tick(&mut world);
        assert!(world.get_entity(e).is_err());
    }

    #[test]
    fn test_default_actor_removed_below_band() {
        let mut world = make_world(GameType::Puzzle);
        let e = world
            .spawn((Actor::new(1, ActorKind::Collectible, 1.0, 0), FieldPosition::new(50.0, 109.5)))
            .id();
        tick(&mut world);
        assert!(world.get_entity(e).is_err());
    }

    #[test]
    fn test_flying_only_obstacles_wobble() {
        let mut world = make_world(GameType::Flying);
        world.resource_mut::<WorldTime>().elapsed = 0.157;
        let obstacle = world
            .spawn((Actor::new(1, ActorKind::Obstacle, 1.0, 0), FieldPosition::new(50.0, 30.0)))
            .id();
        let pickup = world
            .spawn((Actor::new(2, ActorKind::Collectible, 1.0, 0), FieldPosition::new(50.0, 30.0)))
            .id();
        tick(&mut world);
        let o = world.get::<FieldPosition>(obstacle).unwrap();
        let p = world.get::<FieldPosition>(pickup).unwrap();
        assert_eq!(o.x, 49.0);
        assert!((o.y - (30.0 + obstacle_wobble(157.0))).abs() < 1e-4);
        assert!(o.y > 30.0);
        assert_eq!(p.y, 30.0);
    }
}
