//! Serial frame shape

/// Maximum number of data bits per frame (accumulated into a `u32`)
pub const MAX_DATA_BITS: u8 = 32;

/// Maximum number of stop bits per frame
pub const MAX_STOP_BITS: usize = 4;

/// Maximum number of bits in one frame (start + data + parity + stop)
pub const MAX_FRAME_BITS: usize = 1 + MAX_DATA_BITS as usize + 1 + MAX_STOP_BITS;

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    /// No parity bit
    None,
    /// Total count of 1-bits (data + parity) is even
    #[default]
    Even,
    /// Total count of 1-bits (data + parity) is odd
    Odd,
}

impl Parity {
    /// Check if a parity bit is present in the frame
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Parity::None)
    }

    /// Expected parity bit level for a data word with `ones` 1-bits
    ///
    /// Returns `None` when parity is disabled.
    pub const fn expected_bit(self, ones: u32) -> Option<bool> {
        let odd_count = ones % 2 == 1;
        match self {
            Parity::None => None,
            Parity::Even => Some(odd_count),
            Parity::Odd => Some(!odd_count),
        }
    }
}

/// How the idle state waits for a start bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgePolicy {
    /// Poll until the line reads low
    ///
    /// An already-low line is taken as a start bit immediately.
    #[default]
    SampleUntilLow,
    /// Poll until the line reads high, then until it reads low
    IdleThenLow,
}

/// How sample instants are scheduled within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingMode {
    /// Restart the timer before every bit and wait one period
    ///
    /// Loop overhead accumulates as phase drift across the frame.
    #[default]
    RestartPerBit,
    /// Start the timer once at the start edge and wait for absolute deadlines
    AbsoluteDeadline,
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Data bit count outside `1..=32`
    DataBitsOutOfRange(u8),
    /// Stop bit count outside `1..=MAX_STOP_BITS`
    StopBitsOutOfRange(u8),
    /// Baud rate of zero
    ZeroBaudRate,
    /// Timer frequency of zero
    ZeroFrequency,
    /// Timer too slow for the baud rate (half a bit is less than one tick)
    BaudRateTooHigh { frequency: u32, baud_rate: u32 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::DataBitsOutOfRange(n) => {
                write!(f, "data bits {} outside 1..={}", n, MAX_DATA_BITS)
            }
            ConfigError::StopBitsOutOfRange(n) => {
                write!(f, "stop bits {} outside 1..={}", n, MAX_STOP_BITS)
            }
            ConfigError::ZeroBaudRate => f.write_str("baud rate is zero"),
            ConfigError::ZeroFrequency => f.write_str("timer frequency is zero"),
            ConfigError::BaudRateTooHigh {
                frequency,
                baud_rate,
            } => write!(
                f,
                "{} baud needs at least {} Hz, timer runs at {} Hz",
                baud_rate,
                baud_rate.saturating_mul(2),
                frequency
            ),
        }
    }
}

/// Frame shape: data bits, parity and stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameConfig {
    /// Number of data bits (1-32)
    pub data_bits: u8,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits (1-4)
    pub stop_bits: u8,
    /// Start bit detection policy
    pub edge_policy: EdgePolicy,
    /// Sample scheduling
    pub timing_mode: TimingMode,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::new(8, Parity::Even, 1)
    }
}

impl FrameConfig {
    /// Create a frame config with the default edge policy and timing mode
    pub const fn new(data_bits: u8, parity: Parity, stop_bits: u8) -> Self {
        Self {
            data_bits,
            parity,
            stop_bits,
            edge_policy: EdgePolicy::SampleUntilLow,
            timing_mode: TimingMode::RestartPerBit,
        }
    }

    /// Replace the start bit detection policy
    pub const fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Replace the sample scheduling mode
    pub const fn with_timing_mode(mut self, timing_mode: TimingMode) -> Self {
        self.timing_mode = timing_mode;
        self
    }

    /// Check the bit counts are within what the decoder can hold
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.data_bits == 0 || self.data_bits > MAX_DATA_BITS {
            return Err(ConfigError::DataBitsOutOfRange(self.data_bits));
        }
        if self.stop_bits == 0 || self.stop_bits as usize > MAX_STOP_BITS {
            return Err(ConfigError::StopBitsOutOfRange(self.stop_bits));
        }
        Ok(())
    }

    /// Total bits in one frame, start and stop bits included
    pub const fn total_bits(&self) -> u32 {
        1 + self.data_bits as u32 + self.parity.is_enabled() as u32 + self.stop_bits as u32
    }

    /// Mask covering the data bits of a decoded value
    pub const fn data_mask(&self) -> u32 {
        if self.data_bits >= 32 {
            u32::MAX
        } else {
            (1u32 << self.data_bits) - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_even() {
        assert_eq!(Parity::Even.expected_bit(0), Some(false));
        assert_eq!(Parity::Even.expected_bit(2), Some(false));
        assert_eq!(Parity::Even.expected_bit(3), Some(true));
    }

    #[test]
    fn test_parity_odd_is_complement() {
        for ones in 0..8 {
            let even = Parity::Even.expected_bit(ones).unwrap();
            let odd = Parity::Odd.expected_bit(ones).unwrap();
            assert_eq!(odd, !even);
        }
    }

    #[test]
    fn test_parity_none() {
        assert!(!Parity::None.is_enabled());
        assert_eq!(Parity::None.expected_bit(5), None);
    }

    #[test]
    fn test_total_bits() {
        assert_eq!(FrameConfig::new(8, Parity::None, 1).total_bits(), 10);
        assert_eq!(FrameConfig::new(8, Parity::Even, 1).total_bits(), 11);
        assert_eq!(FrameConfig::new(7, Parity::Odd, 2).total_bits(), 11);
    }

    #[test]
    fn test_validate() {
        assert!(FrameConfig::new(1, Parity::None, 1).validate().is_ok());
        assert!(FrameConfig::new(32, Parity::Odd, 4).validate().is_ok());

        assert_eq!(
            FrameConfig::new(0, Parity::None, 1).validate(),
            Err(ConfigError::DataBitsOutOfRange(0))
        );
        assert_eq!(
            FrameConfig::new(33, Parity::None, 1).validate(),
            Err(ConfigError::DataBitsOutOfRange(33))
        );
        assert_eq!(
            FrameConfig::new(8, Parity::None, 0).validate(),
            Err(ConfigError::StopBitsOutOfRange(0))
        );
        assert_eq!(
            FrameConfig::new(8, Parity::None, 5).validate(),
            Err(ConfigError::StopBitsOutOfRange(5))
        );
    }

    #[test]
    fn test_data_mask() {
        assert_eq!(FrameConfig::new(8, Parity::None, 1).data_mask(), 0xFF);
        assert_eq!(FrameConfig::new(1, Parity::None, 1).data_mask(), 0x1);
        assert_eq!(FrameConfig::new(32, Parity::None, 1).data_mask(), u32::MAX);
    }

    #[test]
    fn test_builders() {
        let config = FrameConfig::default()
            .with_edge_policy(EdgePolicy::IdleThenLow)
            .with_timing_mode(TimingMode::AbsoluteDeadline);
        assert_eq!(config.data_bits, 8);
        assert_eq!(config.parity, Parity::Even);
        assert_eq!(config.edge_policy, EdgePolicy::IdleThenLow);
        assert_eq!(config.timing_mode, TimingMode::AbsoluteDeadline);
    }
}
