//! Input sampling resources.
//!
//! [`InputState`] is the set of currently held keys (lower-cased names) plus
//! the keys that went down since the previous tick. It is only mutated by
//! [`crate::systems::input::update_input_state`], which drains the
//! [`InputBridge`] channel one whole event at a time, so a tick never sees a
//! half-applied event. [`InputBindings`] maps logical actions onto key names.
use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use rustc_hash::FxHashSet;

use crate::events::input::{InputAction, KeyEvent};

/// Maximum number of keys bound to one action.
pub const MAX_KEYS_PER_ACTION: usize = 4;

/// Normalise a key identifier: lower-case, with `"space"`/`"spacebar"` folded
/// onto the literal `" "` reported by browsers.
pub fn normalize_key(key: &str) -> String {
    let lower = key.to_lowercase();
    match lower.as_str() {
        "space" | "spacebar" => " ".to_string(),
        _ => lower,
    }
}

/// Set of currently held keys.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    active: FxHashSet<String>,
    just_pressed: FxHashSet<String>,
}

impl InputState {
    /// Mark `key` as held.
    pub fn press(&mut self, key: &str) {
        let key = normalize_key(key);
        if self.active.insert(key.clone()) {
            self.just_pressed.insert(key);
        }
    }

    /// Mark `key` as released.
    pub fn release(&mut self, key: &str) {
        self.active.remove(&normalize_key(key));
    }

    /// Whether `key` is currently held.
    pub fn is_active(&self, key: &str) -> bool {
        self.active.contains(&normalize_key(key))
    }

    /// Whether `key` went down since the last [`InputState::begin_tick`].
    ///
    /// A key pressed and released between two ticks still counts as pressed.
    pub fn was_just_pressed(&self, key: &str) -> bool {
        self.just_pressed.contains(&normalize_key(key))
    }

    /// Forget the edge-triggered presses of the previous tick.
    pub fn begin_tick(&mut self) {
        self.just_pressed.clear();
    }

    /// Apply a single key event.
    pub fn apply(&mut self, event: &KeyEvent) {
        if event.pressed {
            self.press(&event.key);
        } else {
            self.release(&event.key);
        }
    }

    /// Drop every held key, e.g. when the owning view loses focus.
    pub fn clear(&mut self) {
        self.active.clear();
        self.just_pressed.clear();
    }

    /// Whether any key bound to `action` is held.
    pub fn action_active(&self, bindings: &InputBindings, action: InputAction) -> bool {
        bindings.keys(action).iter().any(|k| self.active.contains(k))
    }

    /// Whether any key bound to `action` went down this tick.
    pub fn action_just_pressed(&self, bindings: &InputBindings, action: InputAction) -> bool {
        bindings
            .keys(action)
            .iter()
            .any(|k| self.just_pressed.contains(k))
    }

    /// Held keys, sorted for stable output.
    pub fn held_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.active.iter().cloned().collect();
        keys.sort();
        keys
    }
}

/// Keys bound to each logical action.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    up: ArrayVec<String, MAX_KEYS_PER_ACTION>,
    down: ArrayVec<String, MAX_KEYS_PER_ACTION>,
    left: ArrayVec<String, MAX_KEYS_PER_ACTION>,
    right: ArrayVec<String, MAX_KEYS_PER_ACTION>,
    action: ArrayVec<String, MAX_KEYS_PER_ACTION>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = InputBindings {
            up: ArrayVec::new(),
            down: ArrayVec::new(),
            left: ArrayVec::new(),
            right: ArrayVec::new(),
            action: ArrayVec::new(),
        };
        bindings.bind(InputAction::Up, "w");
        bindings.bind(InputAction::Up, "ArrowUp");
        bindings.bind(InputAction::Down, "s");
        bindings.bind(InputAction::Down, "ArrowDown");
        bindings.bind(InputAction::Left, "a");
        bindings.bind(InputAction::Left, "ArrowLeft");
        bindings.bind(InputAction::Right, "d");
        bindings.bind(InputAction::Right, "ArrowRight");
        bindings.bind(InputAction::Action, " ");
        bindings
    }
}

impl InputBindings {
    /// Keys bound to `action`, already normalised.
    pub fn keys(&self, action: InputAction) -> &[String] {
        match action {
            InputAction::Up => &self.up,
            InputAction::Down => &self.down,
            InputAction::Left => &self.left,
            InputAction::Right => &self.right,
            InputAction::Action => &self.action,
        }
    }

    /// Bind another key to `action`. Returns false when the key is already
    /// bound or the action has no free slot.
    pub fn bind(&mut self, action: InputAction, key: &str) -> bool {
        let key = normalize_key(key);
        let slot = match action {
            InputAction::Up => &mut self.up,
            InputAction::Down => &mut self.down,
            InputAction::Left => &mut self.left,
            InputAction::Right => &mut self.right,
            InputAction::Action => &mut self.action,
        };
        if slot.contains(&key) {
            return false;
        }
        slot.try_push(key).is_ok()
    }
}

/// Channel between the presentation layer and a simulation loop.
///
/// Presentation code holds an [`InputSender`] (cheap to clone, usable from any
/// thread); the loop drains the receiving end at the start of each tick.
#[derive(Resource)]
pub struct InputBridge {
    tx: Sender<KeyEvent>,
    rx: Receiver<KeyEvent>,
}

impl Default for InputBridge {
    fn default() -> Self {
        let (tx, rx) = unbounded::<KeyEvent>();
        InputBridge { tx, rx }
    }
}

impl InputBridge {
    pub fn sender(&self) -> InputSender {
        InputSender {
            tx: self.tx.clone(),
        }
    }

    /// Non-blocking iterator over the events queued so far.
    pub fn pending(&self) -> impl Iterator<Item = KeyEvent> + '_ {
        self.rx.try_iter()
    }
}

/// Sending half of an [`InputBridge`].
#[derive(Clone, Debug)]
pub struct InputSender {
    tx: Sender<KeyEvent>,
}

impl InputSender {
    /// Queue a key press. Events sent after the loop is gone are dropped.
    pub fn press(&self, key: &str) {
        let _ = self.tx.send(KeyEvent::press(key));
    }

    /// Queue a key release.
    pub fn release(&self, key: &str) {
        let _ = self.tx.send(KeyEvent::release(key));
    }
}
