//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS worlds and
//! accessed by systems during execution: input state, timing, the play field,
//! session counters and the timeline. Each submodule documents the semantics
//! and intended usage of its resource(s).
//!
//! Overview
//! - `camera2d` – editor camera zoom
//! - `editormode` – edit/play toggle and the in-flight drag
//! - `gameconfig` – INI-backed simulation settings
//! - `gamestate` – mini-game session state machine
//! - `input` – per-tick keyboard state and the thread-safe input bridge
//! - `notifications` – timed toast messages shown by the studio
//! - `playfield` – canvas bounds and 2D/3D flag
//! - `session` – score, lives, speed and per-genre counters
//! - `spawner` – seeded RNG and actor id counter
//! - `timeline` – keyframe tracks, playhead and selection
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod editormode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod notifications;
pub mod playfield;
pub mod session;
pub mod spawner;
pub mod timeline;
pub mod worldtime;
