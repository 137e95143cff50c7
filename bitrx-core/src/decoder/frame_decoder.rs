//! Timed sampling of one serial frame

use crate::config::{ConfigError, EdgePolicy, FrameConfig, TimingMode};
use crate::timing::TimingProfile;
use crate::traits::{LineSampler, TickTimer};

use super::frame::DecodedFrame;
use super::state::DecodeState;

/// Bit-banged frame decoder
///
/// Owns the timer and line for the lifetime of the receiver. Only one frame
/// is ever in flight: [`decode`](Self::decode) returns before the next
/// start bit is looked for.
pub struct FrameDecoder<T, L> {
    timer: T,
    line: L,
    config: FrameConfig,
    timing: TimingProfile,
}

impl<T: TickTimer, L: LineSampler> FrameDecoder<T, L> {
    /// Create a decoder
    ///
    /// `timing` must have been derived from the same frame config.
    pub fn new(
        timer: T,
        line: L,
        config: FrameConfig,
        timing: TimingProfile,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            timer,
            line,
            config,
            timing,
        })
    }

    /// Frame configuration
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Derived timing profile
    pub fn timing(&self) -> &TimingProfile {
        &self.timing
    }

    /// Release the timer and line
    pub fn into_parts(self) -> (T, L) {
        (self.timer, self.line)
    }

    /// Wait for a start bit and decode one frame
    ///
    /// Blocks until the line goes low. Once it has, the frame always runs to
    /// completion; bit errors are flagged on the result.
    pub fn decode(&mut self) -> DecodedFrame {
        let mut frame = DecodedFrame::new();
        let mut ones = 0u32;
        let mut state = DecodeState::Idle;

        loop {
            match state {
                DecodeState::Idle => self.wait_for_start(),
                DecodeState::StartValidate => {
                    frame.start_bit_error = self.sample(state);
                }
                DecodeState::Data(n) => {
                    if self.sample(state) {
                        ones += 1;
                        frame.data |= 1 << n;
                    }
                }
                DecodeState::Parity => {
                    let level = self.sample(state);
                    frame.parity_error = self
                        .config
                        .parity
                        .expected_bit(ones)
                        .is_some_and(|expected| expected != level);
                }
                DecodeState::Stop(_) => {
                    let level = self.sample(state);
                    // Capacity is MAX_STOP_BITS, checked in new()
                    let _ = frame.stop_bit_errors.push(!level);
                }
                DecodeState::Complete => return frame,
            }
            state = state.next(&self.config);
        }
    }

    /// Busy-wait for the line to go low
    fn wait_for_start(&mut self) {
        if self.config.edge_policy == EdgePolicy::IdleThenLow {
            while self.line.is_low() {
                core::hint::spin_loop();
            }
        }
        while self.line.is_high() {
            core::hint::spin_loop();
        }

        if self.config.timing_mode == TimingMode::AbsoluteDeadline {
            self.timer.start();
        }
    }

    /// Wait for the sample point of `state` and read the line
    #[inline]
    fn sample(&mut self, state: DecodeState) -> bool {
        match self.config.timing_mode {
            TimingMode::RestartPerBit => {
                let period = if state == DecodeState::StartValidate {
                    self.timing.ticks_per_half_bit
                } else {
                    self.timing.ticks_per_bit
                };
                self.timer.start();
                self.timer.wait_until(period);
            }
            TimingMode::AbsoluteDeadline => {
                let index = state.sample_index(&self.config).unwrap_or(0);
                self.timer.wait_until(self.timing.deadline(index));
            }
        }
        self.line.is_high()
    }
}
