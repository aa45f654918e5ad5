//! The display clock: a locally free-running counter that shows a ticking
//! stopwatch without touching the database on every tick.
//!
//! Two clocks exist: the authoritative one (advanced only by confirmed
//! writes, reconstructed by `core::reconcile`) and this one, which is seeded
//! from the authoritative value and advances from a monotonic Instant while
//! running. Every authoritative change (start, pause, stop, project switch)
//! re-seeds it.

use std::time::Instant;

/// Tick resolution of the live display, in milliseconds.
pub const TICK_MS: u64 = 10;

#[derive(Debug, Clone)]
pub struct DisplayClock {
    base_cs: i64,
    running: bool,
    synced_at: Instant,
}

impl DisplayClock {
    /// Seed the clock from an authoritative elapsed value (centiseconds).
    pub fn sync(base_cs: i64, running: bool) -> Self {
        Self {
            base_cs,
            running,
            synced_at: Instant::now(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current display value in centiseconds. Free-runs while running,
    /// stays at the base value while paused.
    pub fn current_cs(&self) -> i64 {
        if self.running {
            self.base_cs + (self.synced_at.elapsed().as_millis() as i64) / 10
        } else {
            self.base_cs
        }
    }

    /// Freeze the clock at its current value (local pause/stop).
    pub fn freeze(&mut self) {
        self.base_cs = self.current_cs();
        self.running = false;
    }
}
