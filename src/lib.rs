//! Protoplay library.
//!
//! Headless core of a game-prototyping studio: an editor scene store ticked
//! by a keyboard-driven loop, a keyframe timeline, and template mini-games.
//! Everything is exposed for integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod loops;
pub mod resources;
pub mod scheduler;
pub mod snapshot;
pub mod studio;
pub mod systems;
pub mod templates;
