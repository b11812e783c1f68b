//! Mini-game session state machine.
//!
//! `Playing ⇄ Paused` through [`GameState::toggle_pause`] (user initiated),
//! `Playing → GameOver` only from the collision resolver when lives reach
//! zero, and `GameOver → Playing` only through a full session reset.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

/// Discrete states of a mini-game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStates {
    #[default]
    Playing,
    Paused,
    GameOver,
}

/// Authoritative current session state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Playing`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::Playing,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }
    /// Update the current state immediately.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
    /// Flip between playing and paused. Has no effect on a finished game.
    ///
    /// Returns the state after the call.
    pub fn toggle_pause(&mut self) -> GameStates {
        self.current = match self.current {
            GameStates::Playing => GameStates::Paused,
            GameStates::Paused => GameStates::Playing,
            GameStates::GameOver => GameStates::GameOver,
        };
        self.current
    }
    pub fn is_playing(&self) -> bool {
        self.current == GameStates::Playing
    }
}
