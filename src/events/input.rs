//! Input events and logical actions.
//!
//! The presentation layer reports raw key presses and releases as
//! [`KeyEvent`]s. They travel through the
//! [`InputBridge`](crate::resources::input::InputBridge) channel and are
//! folded into [`InputState`](crate::resources::input::InputState) at the start
//! of each tick. [`InputAction`] names the gameplay meaning of a group of keys.

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Forward / up (default: W, Up arrow).
    Up,
    /// Back / down (default: S, Down arrow).
    Down,
    /// Left (default: A, Left arrow).
    Left,
    /// Right (default: D, Right arrow).
    Right,
    /// Jump or fire depending on the game (default: Space).
    Action,
}

impl InputAction {
    pub const ALL: [InputAction; 5] = [
        InputAction::Up,
        InputAction::Down,
        InputAction::Left,
        InputAction::Right,
        InputAction::Action,
    ];
}

/// A single press or release of a named key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key identifier as reported by the presentation layer.
    pub key: String,
    /// Whether the key went down (true) or up (false).
    pub pressed: bool,
}

impl KeyEvent {
    pub fn press(key: impl Into<String>) -> Self {
        KeyEvent {
            key: key.into(),
            pressed: true,
        }
    }

    pub fn release(key: impl Into<String>) -> Self {
        KeyEvent {
            key: key.into(),
            pressed: false,
        }
    }
}
