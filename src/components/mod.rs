//! ECS components for entities.
//!
//! Editor scene objects and mini-game actors are both plain ECS entities; the
//! components below describe them.
//!
//! Submodules overview:
//! - [`actor`] – transient mini-game objects (enemy, collectible, obstacle, projectile)
//! - [`fieldposition`] – percentage-space position used by the mini-game
//! - [`mapposition`] – pixel-space position used by the editor
//! - [`physics`] – flat physics attributes (mass, friction, flags)
//! - [`player`] – mini-game player marker and jump landing countdown
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – uniform scale factor
//! - [`sceneobject`] – scene object identity, type tag, behaviour tags, selection
//! - [`tint`] – display colour

pub mod actor;
pub mod fieldposition;
pub mod mapposition;
pub mod physics;
pub mod player;
pub mod rotation;
pub mod scale;
pub mod sceneobject;
pub mod tint;
