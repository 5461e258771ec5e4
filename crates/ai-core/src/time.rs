//! Simulation time model.
//!
//! # Design
//!
//! The scheduler itself is clockless: it receives a `dt` every tick and
//! tasks that need absolute time (the flee duration budget) read elapsed
//! milliseconds through the world interface.  `SimClock` is the canonical
//! implementation of that counter for hosts and tests: an integer tick
//! count plus a millisecond accumulator advanced by per-tick `dt`.
//!
//! Milliseconds accumulate in `f64` and are exposed rounded to `u64`, so a
//! 60 Hz simulation holds sub-tick precision for centuries of game time and
//! an `f32` dt like 0.02 still reads back as exact 20 ms steps.

/// Tick counter + elapsed-milliseconds accumulator.
///
/// Cheap to copy; hosts embed one per world (not per agent) and advance it
/// once per simulation tick before ticking any scheduler.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Number of completed ticks.
    pub current_tick: u64,
    elapsed_ms: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick of `dt_secs` simulated seconds.
    #[inline]
    pub fn advance(&mut self, dt_secs: f32) {
        self.current_tick += 1;
        self.elapsed_ms += dt_secs as f64 * 1000.0;
    }

    /// Milliseconds elapsed since tick 0, rounded to the nearest integer.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms.round() as u64
    }
}
