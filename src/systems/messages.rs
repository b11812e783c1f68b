//! Message queue maintenance.
use bevy_ecs::message::{Message, Messages};
use bevy_ecs::prelude::*;

/// Advance the double buffer of a message queue.
///
/// Runs once at the start of every tick. A message written during a tick
/// stays readable through the end of the next one, so whoever drains the
/// queue between ticks sees it, and undrained messages cannot pile up.
pub fn update_messages<M: Message>(mut messages: ResMut<Messages<M>>) {
    messages.update();
}
