//! Percentage-space position for mini-game actors and the mini-game player.
//!
//! Both axes run from 0 to 100 across the visible play area. Actors may sit
//! slightly outside that band while entering or leaving the screen.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::mapposition::MapPosition;
use crate::resources::playfield::PlayField;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldPosition {
    pub x: f32,
    pub y: f32,
}

impl FieldPosition {
    pub fn new(x: f32, y: f32) -> Self {
        FieldPosition { x, y }
    }

    /// Euclidean distance in percentage units.
    pub fn distance(&self, other: &FieldPosition) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Convert to pixel space relative to `field`.
    pub fn to_map_position(&self, field: &PlayField) -> MapPosition {
        MapPosition::new(self.x / 100.0 * field.width, self.y / 100.0 * field.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = FieldPosition::new(50.0, 50.0);
        let b = FieldPosition::new(53.0, 54.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_to_map_position() {
        let field = PlayField::default();
        let mp = FieldPosition::new(50.0, 100.0).to_map_position(&field);
        assert_eq!(mp.x, 400.0);
        assert_eq!(mp.y, 600.0);
    }
}
