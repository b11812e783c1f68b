//! Run conditions over the session state machine.
use bevy_ecs::prelude::*;

use crate::resources::editormode::EditorMode;
use crate::resources::gamestate::{GameState, GameStates};

/// Gameplay systems only run while the session is playing. Paused and game
/// over sessions skip movement, spawning and collision entirely.
pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

/// The editor moves its controllable object only in play mode.
pub fn editor_in_play_mode(mode: Res<EditorMode>) -> bool {
    mode.play_mode
}
