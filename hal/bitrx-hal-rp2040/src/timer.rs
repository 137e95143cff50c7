//! Sampling timer on the embassy-time tick counter
//!
//! On RP2040 the embassy time driver reads the 1 MHz system timer, so one
//! tick is one microsecond.

use bitrx_core::TickTimer;
use embassy_time::{Instant, TICK_HZ};

/// Tick timer with a restartable origin
pub struct InstantTimer {
    origin: u64,
}

impl Default for InstantTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl InstantTimer {
    pub fn new() -> Self {
        Self {
            origin: Instant::now().as_ticks(),
        }
    }
}

impl TickTimer for InstantTimer {
    #[inline]
    fn start(&mut self) {
        self.origin = Instant::now().as_ticks();
    }

    fn frequency(&self) -> u32 {
        TICK_HZ as u32
    }

    #[inline]
    fn elapsed(&mut self) -> u32 {
        let ticks = Instant::now().as_ticks().saturating_sub(self.origin);
        ticks.min(u32::MAX as u64) as u32
    }
}
