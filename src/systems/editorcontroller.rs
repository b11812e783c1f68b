//! Editor playtest controller.
//!
//! Reads the shared [`InputState`] and moves the controllable scene object:
//! the first object, by scene order, whose kind is player or which carries the
//! `player` behavior. Other objects are never touched. With no controllable
//! object the system does nothing.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sceneobject::{Behaviors, SceneObject, is_controllable};
use crate::events::input::InputAction;
use crate::resources::gameconfig::SimConfig;
use crate::resources::input::{InputBindings, InputState};
use crate::resources::playfield::PlayField;

/// Apply one tick of held-key movement to the controllable object.
///
/// Up/down move along y in 2-D and along z in 3-D. Left/right move along x.
/// The action key lifts an object with the `jump` behavior by the configured
/// offset on every tick it is held; there is no arc and no gravity. The result
/// is clamped to the play field.
pub fn editor_controller(
    mut query: Query<(&SceneObject, &Behaviors, &mut MapPosition)>,
    input: Res<InputState>,
    bindings: Res<InputBindings>,
    field: Res<PlayField>,
    config: Res<SimConfig>,
) {
    let Some((_, behaviors, mut position)) = query
        .iter_mut()
        .filter(|(object, behaviors, _)| is_controllable(object, behaviors))
        .min_by_key(|(object, _, _)| object.order)
    else {
        return;
    };

    let step = config.editor_step;
    let mut next = *position;

    if input.action_active(&bindings, InputAction::Up) {
        if field.is_3d {
            next.z -= step;
        } else {
            next.y -= step;
        }
    }
    if input.action_active(&bindings, InputAction::Down) {
        if field.is_3d {
            next.z += step;
        } else {
            next.y += step;
        }
    }
    if input.action_active(&bindings, InputAction::Left) {
        next.x -= step;
    }
    if input.action_active(&bindings, InputAction::Right) {
        next.x += step;
    }
    if input.action_active(&bindings, InputAction::Action) && behaviors.has("jump") {
        next.y -= config.jump_offset;
    }

    next.clamp_to(&field);
    if next != *position {
        *position = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sceneobject::ObjectKind;

    fn make_world(is_3d: bool) -> World {
        let mut world = World::new();
        world.insert_resource(InputState::default());
        world.insert_resource(InputBindings::default());
        world.insert_resource(PlayField::default().with_3d(is_3d));
        world.insert_resource(SimConfig::new());
        world
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(editor_controller);
        schedule.run(world);
    }

    #[test]
    fn test_moves_only_the_first_controllable() {
        let mut world = make_world(false);
        let enemy = world
            .spawn((
                SceneObject::new("enemy", ObjectKind::Enemy, 0),
                Behaviors::default(),
                MapPosition::new(100.0, 100.0),
            ))
            .id();
        let second = world
            .spawn((
                SceneObject::new("p2", ObjectKind::Player, 2),
                Behaviors::default(),
                MapPosition::new(300.0, 300.0),
            ))
            .id();
        let first = world
            .spawn((
                SceneObject::new("p1", ObjectKind::Character, 1),
                Behaviors::from_tags(["player"]),
                MapPosition::new(200.0, 200.0),
            ))
            .id();
        world.resource_mut::<InputState>().press("d");
        tick(&mut world);

        assert_eq!(world.get::<MapPosition>(first).unwrap().x, 205.0);
        assert_eq!(world.get::<MapPosition>(second).unwrap().x, 300.0);
        assert_eq!(world.get::<MapPosition>(enemy).unwrap().x, 100.0);
    }

    #[test]
    fn test_up_moves_depth_in_3d() {
        let mut world = make_world(true);
        let e = world
            .spawn((
                SceneObject::new("p", ObjectKind::Player, 0),
                Behaviors::default(),
                MapPosition::new(100.0, 100.0),
            ))
            .id();
        world.resource_mut::<InputState>().press("w");
        tick(&mut world);
        let pos = world.get::<MapPosition>(e).unwrap();
        assert_eq!(pos.y, 100.0);
        assert_eq!(pos.z, -5.0);
    }

    #[test]
    fn test_jump_requires_behavior() {
        let mut world = make_world(false);
        let jumper = world
            .spawn((
                SceneObject::new("p", ObjectKind::Player, 0),
                Behaviors::from_tags(["jump"]),
                MapPosition::new(100.0, 100.0),
            ))
            .id();
        world.resource_mut::<InputState>().press(" ");
        tick(&mut world);
        assert_eq!(world.get::<MapPosition>(jumper).unwrap().y, 90.0);

        world.get_mut::<Behaviors>(jumper).unwrap().remove("jump");
        tick(&mut world);
        assert_eq!(world.get::<MapPosition>(jumper).unwrap().y, 90.0);
    }

    #[test]
    fn test_clamped_at_field_edge() {
        let mut world = make_world(false);
        let e = world
            .spawn((
                SceneObject::new("p", ObjectKind::Player, 0),
                Behaviors::default(),
                MapPosition::new(798.0, 2.0),
            ))
            .id();
        {
            let mut input = world.resource_mut::<InputState>();
            input.press("ArrowRight");
            input.press("ArrowUp");
        }
        tick(&mut world);
        let pos = world.get::<MapPosition>(e).unwrap();
        assert_eq!(pos.x, 800.0);
        assert_eq!(pos.y, 0.0);
    }
}
