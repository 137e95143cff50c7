//! Decoded frame and per-frame errors

use heapless::Vec;

use crate::config::MAX_STOP_BITS;

/// Per-stop-bit error flags, in line order
pub type StopBitErrors = Vec<bool, MAX_STOP_BITS>;

/// Bit errors detected in a single frame
///
/// None of these abort decoding. They are attached to the frame and
/// reported by the receive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Start bit sampled high
    StartBit,
    /// Parity bit did not match the data bits
    Parity,
    /// Stop bit `n` (0-based) sampled low
    StopBit(u8),
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::StartBit => f.write_str("Error receiving the start bit"),
            FrameError::Parity => f.write_str("Parity error"),
            FrameError::StopBit(n) => write!(f, "Stop bit error (stop bit {})", *n as u32 + 1),
        }
    }
}

/// One decoded frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodedFrame {
    /// Data bits, least significant bit first on the line
    pub data: u32,
    /// Start bit sampled high
    pub start_bit_error: bool,
    /// Parity mismatch (always false without parity)
    pub parity_error: bool,
    /// One entry per stop bit, `true` where the stop bit sampled low
    pub stop_bit_errors: StopBitErrors,
}

impl DecodedFrame {
    /// Create an empty frame with no errors
    pub fn new() -> Self {
        Self::default()
    }

    /// Low byte of the data value
    pub fn byte(&self) -> u8 {
        (self.data & 0xFF) as u8
    }

    /// Check if any error flag is set
    pub fn has_errors(&self) -> bool {
        self.start_bit_error || self.parity_error || self.stop_bit_errors.iter().any(|&e| e)
    }

    /// Number of stop bits that sampled low
    pub fn stop_bit_error_count(&self) -> u32 {
        self.stop_bit_errors.iter().filter(|&&e| e).count() as u32
    }

    /// Iterate over the errors in line order
    pub fn errors(&self) -> impl Iterator<Item = FrameError> + '_ {
        let start = self.start_bit_error.then_some(FrameError::StartBit);
        let parity = self.parity_error.then_some(FrameError::Parity);
        let stops = self
            .stop_bit_errors
            .iter()
            .enumerate()
            .filter(|(_, e)| **e)
            .map(|(n, _)| FrameError::StopBit(n as u8));

        start.into_iter().chain(parity).chain(stops)
    }
}
