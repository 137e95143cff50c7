//! Receiver configuration

use super::frame::{ConfigError, FrameConfig, Parity};

/// Default baud rate
pub const DEFAULT_BAUD_RATE: u32 = 10_000;

/// Default receiver configuration: 10000 baud, 8E1
pub const DEFAULT_RECEIVER_CONFIG: ReceiverConfig =
    ReceiverConfig::new(DEFAULT_BAUD_RATE, FrameConfig::new(8, Parity::Even, 1));

/// Baud rate plus frame shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReceiverConfig {
    /// Line rate in bits per second
    pub baud_rate: u32,
    /// Frame shape
    pub frame: FrameConfig,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        DEFAULT_RECEIVER_CONFIG
    }
}

impl ReceiverConfig {
    pub const fn new(baud_rate: u32, frame: FrameConfig) -> Self {
        Self { baud_rate, frame }
    }

    /// Validate everything that does not depend on the timer
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.baud_rate == 0 {
            return Err(ConfigError::ZeroBaudRate);
        }
        self.frame.validate()
    }
}

// The defaults must always be usable.
const _: () = assert!(DEFAULT_RECEIVER_CONFIG.validate().is_ok());
