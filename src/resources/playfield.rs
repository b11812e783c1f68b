//! Play-field bounds resource.
//!
//! Stores the editor play-field dimensions in pixels and whether the editor is
//! in 3-D mode. Every scene object position is clamped into these bounds after
//! any mutation.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;
pub const DEFAULT_FIELD_DEPTH: f32 = 200.0;

/// Play-field bounds: x in `[0, width]`, y in `[0, height]` and, in 3-D mode,
/// z in `[-depth, depth]`.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub is_3d: bool,
}

impl Default for PlayField {
    fn default() -> Self {
        PlayField {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
            depth: DEFAULT_FIELD_DEPTH,
            is_3d: false,
        }
    }
}

impl PlayField {
    /// Build a field, falling back to the defaults for non-positive sizes.
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        let pick = |v: f32, d: f32| if v > 0.0 { v } else { d };
        PlayField {
            width: pick(width, DEFAULT_FIELD_WIDTH),
            height: pick(height, DEFAULT_FIELD_HEIGHT),
            depth: pick(depth, DEFAULT_FIELD_DEPTH),
            is_3d: false,
        }
    }

    pub fn with_3d(mut self, is_3d: bool) -> Self {
        self.is_3d = is_3d;
        self
    }
}
