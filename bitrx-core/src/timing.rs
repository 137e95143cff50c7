//! Bit timing derivation
//!
//! Converts the timer frequency and baud rate into tick counts for one bit
//! and half a bit. Both are truncating integer divisions, so the real bit
//! period is slightly longer than `ticks_per_bit` ticks. Over a long frame
//! the difference shows up as phase drift towards the start of each bit.

use crate::config::{ConfigError, FrameConfig};
use crate::traits::TickTimer;

/// Tick counts derived once from the timer frequency and baud rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingProfile {
    /// Ticks in one full bit period (`frequency / baud_rate`)
    pub ticks_per_bit: u32,
    /// Ticks in half a bit period (`ticks_per_bit / 2`)
    pub ticks_per_half_bit: u32,
    /// Bits per frame: start + data + parity + stop
    pub total_bits: u32,
}

impl TimingProfile {
    /// Derive the profile for a timer running at `frequency` ticks per second
    ///
    /// Fails if the half-bit period would round down to zero ticks.
    pub fn derive(
        frequency: u32,
        baud_rate: u32,
        frame: &FrameConfig,
    ) -> Result<Self, ConfigError> {
        if frequency == 0 {
            return Err(ConfigError::ZeroFrequency);
        }
        if baud_rate == 0 {
            return Err(ConfigError::ZeroBaudRate);
        }
        frame.validate()?;

        let ticks_per_bit = frequency / baud_rate;
        let ticks_per_half_bit = ticks_per_bit / 2;
        if ticks_per_half_bit == 0 {
            return Err(ConfigError::BaudRateTooHigh {
                frequency,
                baud_rate,
            });
        }

        Ok(Self {
            ticks_per_bit,
            ticks_per_half_bit,
            total_bits: frame.total_bits(),
        })
    }

    /// Ticks from the start edge to the centre of sample `index`
    ///
    /// Sample 0 is the start bit, sample 1 the first data bit, and so on.
    pub const fn deadline(&self, index: u32) -> u32 {
        self.ticks_per_half_bit
            .saturating_add(self.ticks_per_bit.saturating_mul(index))
    }

    /// Nominal duration of one whole frame in ticks
    pub const fn frame_ticks(&self) -> u32 {
        self.ticks_per_bit.saturating_mul(self.total_bits)
    }
}

/// Measure the cost of one `elapsed()` call in ticks
///
/// Restarts the timer and reads it twice back to back. The result bounds
/// how much each spin-wait can overshoot its deadline.
pub fn measure_read_overhead<T: TickTimer>(timer: &mut T) -> u32 {
    timer.start();
    let t1 = timer.elapsed();
    let t2 = timer.elapsed();
    t2.wrapping_sub(t1)
}
