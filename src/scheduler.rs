//! Deterministic fixed-interval timers.
//!
//! The loops never read the wall clock. Whoever drives them feeds elapsed
//! time into [`Scheduler::advance`] and runs one tick for every handle it
//! returns. Tests feed synthetic durations; the binary's `--realtime` mode
//! feeds measured ones.
//!
//! Each timer keeps a fixed-step accumulator. A timer that falls far behind
//! fires at most `max_catch_up` times per call and drops the rest of its
//! backlog, so a stalled host cannot trigger a burst of ticks.

use log::{debug, warn};
use std::time::Duration;

pub const MIN_INTERVAL: Duration = Duration::from_millis(1);
pub const DEFAULT_MAX_CATCH_UP: u32 = 5;

/// Identifies a running timer. Handles are never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Timer {
    handle: TimerHandle,
    interval: Duration,
    accumulated: Duration,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    timers: Vec<Timer>,
    next_handle: u64,
    max_catch_up: u32,
}

impl Default for Scheduler {
    fn default() -> Self {
        Scheduler::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler {
            timers: Vec::new(),
            next_handle: 1,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        }
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    /// Start a timer firing every `interval` (at least 1 ms).
    pub fn start(&mut self, interval: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timers.push(Timer {
            handle,
            interval: interval.max(MIN_INTERVAL),
            accumulated: Duration::ZERO,
        });
        debug!("timer {:?} started every {:?}", handle, interval);
        handle
    }

    /// Stop a timer. It never fires again. Returns false for unknown or
    /// already stopped handles.
    pub fn stop(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        let stopped = self.timers.len() != before;
        if stopped {
            debug!("timer {:?} stopped", handle);
        }
        stopped
    }

    pub fn is_running(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    pub fn running_count(&self) -> usize {
        self.timers.len()
    }

    /// Change the interval of a running timer, keeping its accumulated time.
    pub fn set_interval(&mut self, handle: TimerHandle, interval: Duration) -> bool {
        match self.timers.iter_mut().find(|t| t.handle == handle) {
            Some(timer) => {
                timer.interval = interval.max(MIN_INTERVAL);
                true
            }
            None => false,
        }
    }

    /// Time until the earliest timer is due, or None with no timers.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers
            .iter()
            .map(|t| t.interval.saturating_sub(t.accumulated))
            .min()
    }

    /// Let `dt` pass and return the handles that fired, in firing order.
    ///
    /// Timers firing at the same instant are ordered by handle.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerHandle> {
        let mut fired: Vec<(Duration, TimerHandle)> = Vec::new();
        for timer in self.timers.iter_mut() {
            let before = timer.accumulated;
            timer.accumulated += dt;
            let due = (timer.accumulated.as_nanos() / timer.interval.as_nanos()) as u64;
            let count = due.min(self.max_catch_up as u64) as u32;
            for k in 1..=count {
                // Offset within `dt` at which the k-th firing happens.
                let at = (timer.interval * k).saturating_sub(before);
                fired.push((at, timer.handle));
            }
            if due > count as u64 {
                warn!(
                    "timer {:?} dropped {} late tick(s)",
                    timer.handle,
                    due - count as u64
                );
                timer.accumulated = Duration::from_nanos(
                    (timer.accumulated.as_nanos() % timer.interval.as_nanos()) as u64,
                );
            } else {
                timer.accumulated -= timer.interval * count;
            }
        }
        fired.sort_by_key(|(at, handle)| (*at, *handle));
        fired.into_iter().map(|(_, handle)| handle).collect()
    }
}
