//! Simulation time resource.
//!
//! Each loop owns one [`WorldTime`]. It advances by the loop's fixed tick
//! interval, never by wall-clock time, so runs are reproducible.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds of simulated time since the loop started.
    pub elapsed: f32,
    /// Seconds covered by the current tick.
    pub delta: f32,
    pub time_scale: f32,
    /// Number of ticks processed so far; the current tick while systems run.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Elapsed simulated time in milliseconds.
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed * 1000.0
    }
}
