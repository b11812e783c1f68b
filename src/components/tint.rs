//! Display colour of a scene object.
//!
//! The colour is carried through to snapshots untouched; the simulation never
//! reads it.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, PartialEq)]
pub struct Tint {
    /// CSS-style colour string, e.g. `#00D4FF`.
    pub color: String,
}

impl Tint {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::new("#FFFFFF")
    }
}
