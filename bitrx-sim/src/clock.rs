//! Shared simulated time

use core::cell::Cell;

/// Simulated tick counter
///
/// Shared by `&` between the timer and the line; interior mutability lets
/// both advance it.
#[derive(Debug, Default)]
pub struct SimClock {
    now: Cell<u64>,
    step: u64,
}

impl SimClock {
    /// Clock that advances one tick per read
    pub fn new() -> Self {
        Self::with_step(1)
    }

    /// Clock that advances `step` ticks per read
    ///
    /// Larger steps model a slower CPU polling loop.
    pub fn with_step(step: u64) -> Self {
        Self {
            now: Cell::new(0),
            step,
        }
    }

    /// Current tick
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    /// Ticks consumed by one read
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Advance by one read
    pub fn tick(&self) {
        self.advance(self.step);
    }

    /// Advance by `ticks`
    pub fn advance(&self, ticks: u64) {
        self.now.set(self.now.get().saturating_add(ticks));
    }
}
