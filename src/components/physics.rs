//! Flat physics attributes of a scene object.
//!
//! These are plain scalars edited from the properties panel. Nothing
//! integrates them; the editor tick only moves objects by input deltas.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

pub const MIN_MASS: f32 = 0.1;
pub const MAX_MASS: f32 = 10.0;

#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsBody {
    /// Mass, always positive.
    pub mass: f32,
    /// Friction coefficient in [0, 1].
    pub friction: f32,
    pub gravity: bool,
    pub collision: bool,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        PhysicsBody {
            mass: 1.0,
            friction: 0.5,
            gravity: true,
            collision: true,
        }
    }
}

impl PhysicsBody {
    pub fn new(mass: f32, friction: f32, gravity: bool, collision: bool) -> Self {
        let mut body = PhysicsBody {
            mass,
            friction,
            gravity,
            collision,
        };
        body.sanitize();
        body
    }

    /// Edit the mass. Edits are limited to the slider range
    /// [`MIN_MASS`, `MAX_MASS`]; loaded scenes may carry heavier bodies.
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass.clamp(MIN_MASS, MAX_MASS);
        self.sanitize();
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.friction = friction;
        self.sanitize();
    }

    /// Keep mass positive and friction in [0, 1]. NaN falls back to the
    /// defaults.
    pub fn sanitize(&mut self) {
        let defaults = PhysicsBody::default();
        self.mass = if self.mass.is_nan() {
            defaults.mass
        } else {
            self.mass.max(MIN_MASS)
        };
        self.friction = if self.friction.is_nan() {
            defaults.friction
        } else {
            self.friction.clamp(0.0, 1.0)
        };
    }
}
