//! Pixel-space position for editor scene objects.
//!
//! [`MapPosition`] lives in the editor coordinate space (pixels, origin at the
//! top-left of the play field, optional depth axis for 3-D mode). Mini-game
//! actors use [`FieldPosition`](super::fieldposition::FieldPosition) instead;
//! the two are deliberately distinct types and only convert through the named
//! functions below.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::fieldposition::FieldPosition;
use crate::resources::playfield::PlayField;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
    /// Depth, only meaningful while the editor is in 3-D mode.
    pub z: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition { x, y, z: 0.0 }
    }

    pub fn with_depth(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    /// Clamp every axis into the play-field bounds.
    ///
    /// Depth is only clamped when the field is in 3-D mode; in 2-D mode it is
    /// left as stored.
    pub fn clamp_to(&mut self, field: &PlayField) {
        self.x = self.x.clamp(0.0, field.width);
        self.y = self.y.clamp(0.0, field.height);
        if field.is_3d {
            self.z = self.z.clamp(-field.depth, field.depth);
        }
    }

    /// Convert to percentage space relative to `field`.
    pub fn to_field_position(&self, field: &PlayField) -> FieldPosition {
        FieldPosition::new(
            self.x / field.width.max(f32::EPSILON) * 100.0,
            self.y / field.height.max(f32::EPSILON) * 100.0,
        )
    }
}
