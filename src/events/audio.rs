//! Audio cues emitted by the mini-game.
//!
//! The simulation never plays sound itself. Gameplay systems write
//! [`AudioCue`] messages while the session has sound enabled; the
//! presentation layer drains them after each tick and plays whatever it likes.

use bevy_ecs::message::Message;
use serde::Serialize;

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCue {
    /// The player touched an enemy or obstacle.
    Damage,
    /// The player picked up a collectible.
    Collect,
    /// A projectile was fired.
    Shoot,
    /// The runner jumped.
    Jump,
}
