//! Simulated tick timer

use bitrx_core::TickTimer;

use crate::clock::SimClock;

/// Tick timer backed by a [`SimClock`]
pub struct SimTimer<'a> {
    clock: &'a SimClock,
    frequency: u32,
    started_at: u64,
}

impl<'a> SimTimer<'a> {
    /// Create a timer reporting `frequency` ticks per second
    pub fn new(clock: &'a SimClock, frequency: u32) -> Self {
        Self {
            clock,
            frequency,
            started_at: clock.now(),
        }
    }
}

impl TickTimer for SimTimer<'_> {
    fn start(&mut self) {
        self.started_at = self.clock.now();
    }

    fn frequency(&self) -> u32 {
        self.frequency
    }

    fn elapsed(&mut self) -> u32 {
        self.clock.tick();
        let elapsed = self.clock.now() - self.started_at;
        u32::try_from(elapsed).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_since_start() {
        let clock = SimClock::new();
        let mut timer = SimTimer::new(&clock, 1_000_000);

        assert_eq!(timer.elapsed(), 1);
        assert_eq!(timer.elapsed(), 2);

        clock.advance(100);
        timer.start();
        assert_eq!(timer.elapsed(), 1);
    }

    #[test]
    fn test_wait_until() {
        let clock = SimClock::with_step(7);
        let mut timer = SimTimer::new(&clock, 1_000_000);

        timer.start();
        timer.wait_until(50);
        // Overshoots to the next multiple of the step
        assert_eq!(clock.now(), 56);
    }
}
