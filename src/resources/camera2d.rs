//! Editor camera resource.
//!
//! Holds the zoom factor of the editor canvas. Zoom scales the
//! drag deltas (screen pixels to world pixels) and is kept inside
//! [`MIN_ZOOM`, `MAX_ZOOM`].

use bevy_ecs::prelude::Resource;
use serde::Serialize;

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 3.0;
/// Multiplicative zoom step for one wheel notch towards the viewer.
pub const ZOOM_IN_FACTOR: f32 = 1.1;
/// Multiplicative zoom step for one wheel notch away from the viewer.
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

#[derive(Resource, Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EditorCamera {
    pub zoom: f32,
}

impl Default for EditorCamera {
    fn default() -> Self {
        EditorCamera { zoom: 1.0 }
    }
}

impl EditorCamera {
    /// Apply one wheel step. Positive `wheel_delta` zooms out, anything else
    /// zooms in.
    pub fn zoom_by_wheel(&mut self, wheel_delta: f32) {
        let factor = if wheel_delta > 0.0 {
            ZOOM_OUT_FACTOR
        } else {
            ZOOM_IN_FACTOR
        };
        self.set_zoom(self.zoom * factor);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = if zoom.is_nan() {
            1.0
        } else {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        };
    }

    /// Convert a screen-space delta into a world-space delta.
    pub fn screen_to_world_delta(&self, dx: f32, dy: f32) -> (f32, f32) {
        (dx / self.zoom, dy / self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps_and_clamps() {
        let mut cam = EditorCamera::default();
        cam.zoom_by_wheel(-1.0);
        assert!((cam.zoom - 1.1).abs() < 1e-6);
        cam.zoom_by_wheel(1.0);
        assert!((cam.zoom - 0.99).abs() < 1e-6);
        for _ in 0..100 {
            cam.zoom_by_wheel(-1.0);
        }
        assert_eq!(cam.zoom, MAX_ZOOM);
        for _ in 0..100 {
            cam.zoom_by_wheel(1.0);
        }
        assert_eq!(cam.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_default_is_unzoomed() {
        let cam = EditorCamera::default();
        assert_eq!(cam.zoom, 1.0);
        assert_eq!(cam.screen_to_world_delta(3.0, 4.0), (3.0, 4.0));
    }

    #[test]
    fn test_screen_to_world_delta() {
        let mut cam = EditorCamera::default();
        cam.set_zoom(2.0);
        assert_eq!(cam.screen_to_world_delta(10.0, -4.0), (5.0, -2.0));
    }
}
