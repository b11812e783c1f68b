//! Input systems.
//!
//! - [`update_input_state`] drains the [`InputBridge`] at the start of each
//!   tick and folds every queued key event into [`InputState`].
use bevy_ecs::prelude::*;
use log::trace;

use crate::resources::input::{InputBridge, InputState};

/// Forget last tick's edge presses, then apply every pending key event.
///
/// Events are applied whole and in arrival order, so systems running later in
/// the tick read a consistent key set.
pub fn update_input_state(mut input: ResMut<InputState>, bridge: Res<InputBridge>) {
    input.begin_tick();
    for event in bridge.pending() {
        trace!("key {:?} pressed={}", event.key, event.pressed);
        input.apply(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drains_bridge_into_state() {
        let mut world = World::new();
        world.insert_resource(InputState::default());
        let bridge = InputBridge::default();
        let sender = bridge.sender();
        world.insert_resource(bridge);

        let mut schedule = Schedule::default();
        schedule.add_systems(update_input_state);

        sender.press("A");
        sender.press("ArrowUp");
        schedule.run(&mut world);
        let input = world.resource::<InputState>();
        assert!(input.is_active("a"));
        assert!(input.was_just_pressed("arrowup"));

        sender.release("a");
        schedule.run(&mut world);
        let input = world.resource::<InputState>();
        assert!(!input.is_active("a"));
        assert!(input.is_active("arrowup"));
        assert!(!input.was_just_pressed("arrowup"));
    }
}
