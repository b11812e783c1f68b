//! Event and message types used by the simulation loops.
//!
//! Events provide a decoupled way for systems and loop drivers to
//! communicate; messages carry output (notices, audio cues) to whoever drains
//! them after a tick.
//!
//! Submodules:
//! - [`audio`] – audio cues written by gameplay systems
//! - [`editor`] – editor tool operations (select, drag, zoom)
//! - [`gamestate`] – end-of-session notification
//! - [`input`] – raw key events and logical input actions
//! - [`notice`] – transient user-facing notices
pub mod audio;
pub mod editor;
pub mod gamestate;
pub mod input;
pub mod notice;
