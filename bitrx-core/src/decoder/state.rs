//! Decoder state machine definition
//!
//! One frame walks the states in a fixed order determined only by the
//! frame config: the line levels never change the path.

use crate::config::FrameConfig;

/// Decoder states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeState {
    /// Waiting for the line to go low
    Idle,
    /// Sampling the centre of the start bit
    StartValidate,
    /// Sampling data bit `n` (0 = least significant)
    Data(u8),
    /// Sampling the parity bit
    Parity,
    /// Sampling stop bit `n`
    Stop(u8),
    /// Frame assembled
    Complete,
}

impl DecodeState {
    /// Check if this state takes a timed line sample
    pub fn is_sampling(&self) -> bool {
        !matches!(self, DecodeState::Idle | DecodeState::Complete)
    }

    /// Position of this state's sample counted from the start bit
    ///
    /// The start bit is sample 0. Returns `None` for states that do not sample.
    pub fn sample_index(&self, config: &FrameConfig) -> Option<u32> {
        let data_bits = config.data_bits as u32;
        let parity_bits = config.parity.is_enabled() as u32;

        match *self {
            DecodeState::StartValidate => Some(0),
            DecodeState::Data(n) => Some(1 + n as u32),
            DecodeState::Parity => Some(1 + data_bits),
            DecodeState::Stop(n) => Some(1 + data_bits + parity_bits + n as u32),
            DecodeState::Idle | DecodeState::Complete => None,
        }
    }

    /// Advance to the next state
    pub fn next(self, config: &FrameConfig) -> Self {
        use DecodeState::*;

        match self {
            Idle => StartValidate,
            StartValidate => Data(0),
            Data(n) if n + 1 < config.data_bits => Data(n + 1),
            Data(_) if config.parity.is_enabled() => Parity,
            Data(_) => Stop(0),
            Parity => Stop(0),
            Stop(n) if n + 1 < config.stop_bits => Stop(n + 1),
            Stop(_) => Complete,
            Complete => Idle,
        }
    }
}
