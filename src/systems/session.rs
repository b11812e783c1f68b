//! Per-tick session bookkeeping.
//!
//! Advances the genre counters (runner distance, flying fuel and wind) and
//! ramps the game speed towards its configured maximum.
use bevy_ecs::prelude::*;

use crate::resources::gameconfig::SimConfig;
use crate::resources::session::{AuxState, Session};
use crate::resources::worldtime::WorldTime;

/// Fuel burnt per tick at game speed 1.
pub const FUEL_BURN: f32 = 0.1;
/// Peak wind strength.
pub const WIND_AMPLITUDE: f32 = 2.0;

pub fn session_progress(mut session: ResMut<Session>, config: Res<SimConfig>, time: Res<WorldTime>) {
    let game_speed = session.game_speed;
    match &mut session.aux {
        AuxState::Running { distance, .. } => *distance += game_speed,
        AuxState::Flying { fuel, wind, .. } => {
            *fuel = (*fuel - FUEL_BURN * game_speed).max(0.0);
            *wind = (time.elapsed_ms() * 0.001).sin() * WIND_AMPLITUDE;
        }
        _ => {}
    }
    session.ramp_speed(config.speed_increment, config.max_speed);
}
