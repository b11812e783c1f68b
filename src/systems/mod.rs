//! Simulation systems.
//!
//! This module groups the ECS systems and observers the three loops schedule.
//!
//! Submodules overview
//! - [`actormovement`] – move mini-game actors and sweep those leaving the field
//! - [`collision`] – player proximity resolution, scoring and game over
//! - [`editorcontroller`] – move the controllable scene object from held keys
//! - [`editortools`] – selection, drag and zoom observers
//! - [`gamestate`] – run conditions over session state and editor mode
//! - [`input`] – drain the input bridge into [`crate::resources::input::InputState`]
//! - [`messages`] – double-buffer rotation for message queues
//! - [`playercontroller`] – mini-game player movement, jumping and shooting
//! - [`session`] – genre counters and game speed ramp
//! - [`spawner`] – procedural actor spawning
//! - [`time`] – advance simulation time
//! - [`timeline`] – timeline playback

pub mod actormovement;
pub mod collision;
pub mod editorcontroller;
pub mod editortools;
pub mod gamestate;
pub mod input;
pub mod messages;
pub mod playercontroller;
pub mod session;
pub mod spawner;
pub mod time;
pub mod timeline;
