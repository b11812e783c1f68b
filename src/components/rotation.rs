use bevy_ecs::prelude::Component;

/// Rotation of a scene object in degrees, as entered in the property panel.
/// Stored unbounded; the panel slider covers 0 to 360.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }
}
