//! Game over event and observer.
//!
//! The collision resolver flips [`GameState`](crate::resources::gamestate::GameState)
//! to `GameOver` itself, within the tick in which the last life is lost, and
//! then triggers [`GameOverEvent`]. The observer here only handles the side
//! effects: logging and the user-facing notice.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::events::notice::{Notice, NoticeLevel};

/// How long the game over notice stays up, in seconds.
pub const GAME_OVER_NOTICE_SECS: f32 = 5.0;

/// Fired once when a session ends.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameOverEvent {
    pub final_score: u32,
    /// Tick on which the last life was lost.
    pub tick: u64,
}

/// Observer that reports the end of a session.
pub fn observe_game_over(trigger: On<GameOverEvent>, mut notices: MessageWriter<Notice>) {
    let event = trigger.event();
    info!(
        "Game over on tick {} with final score {}",
        event.tick, event.final_score
    );
    notices.write(Notice::new(
        format!("Game Over! Final score: {}", event.final_score),
        NoticeLevel::Warning,
        GAME_OVER_NOTICE_SECS,
    ));
}
