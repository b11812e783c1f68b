//! Loop drivers.
//!
//! Each driver owns a private ECS [`World`](bevy_ecs::world::World) and the
//! [`Schedule`](bevy_ecs::schedule::Schedule) that advances it. One call to
//! `tick()` runs the schedule exactly once; drivers never look at the wall
//! clock. Wall-clock pacing, if any, belongs to [`crate::scheduler`].
//!
//! - [`editor`] – editor store, playtest movement and tool operations
//! - [`minigame`] – template mini-game session
//! - [`timeline`] – keyframe timeline playback

pub mod editor;
pub mod minigame;
pub mod timeline;

pub use editor::{EditorLoop, ObjectSpec};
pub use minigame::MiniGameLoop;
pub use timeline::TimelineLoop;
