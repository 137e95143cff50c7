//! Line waveforms
//!
//! A waveform is a list of level changes on a tick axis. Before the first
//! change and after the end the line idles high.
//!
//! Bit periods are kept as a ratio so a waveform can run at the exact baud
//! rate while the receiver works with the truncated `ticks_per_bit`.

use heapless::Vec;

use bitrx_core::config::MAX_FRAME_BITS;
use bitrx_core::FrameConfig;

/// Line levels of one frame, start bit first
pub type FrameBits = Vec<bool, MAX_FRAME_BITS>;

/// Waveform construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaveformError {
    /// More level changes than the waveform capacity
    TooManySegments,
}

/// Lay out one frame as line levels
///
/// Start bit low, data least significant bit first, parity computed from
/// `config.parity`, then `config.stop_bits` high stop bits.
pub fn encode_frame(config: &FrameConfig, data: u32) -> FrameBits {
    let mut bits = FrameBits::new();
    let mut ones = 0u32;

    // Capacity covers every valid config; extra bits are dropped
    let _ = bits.push(false);
    for n in 0..config.data_bits as u32 {
        let bit = data.checked_shr(n).unwrap_or(0) & 1 == 1;
        ones += bit as u32;
        let _ = bits.push(bit);
    }
    if let Some(parity) = config.parity.expected_bit(ones) {
        let _ = bits.push(parity);
    }
    for _ in 0..config.stop_bits {
        let _ = bits.push(true);
    }

    bits
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    start: u64,
    high: bool,
}

/// A finished waveform holding up to `N` level changes
#[derive(Debug, Clone)]
pub struct Waveform<const N: usize> {
    segments: Vec<Segment, N>,
    end: u64,
}

impl<const N: usize> Waveform<N> {
    /// Line level at tick `t`
    pub fn level_at(&self, t: u64) -> bool {
        if t >= self.end {
            return true;
        }
        match self.segments.partition_point(|s| s.start <= t) {
            0 => true,
            idx => self.segments[idx - 1].high,
        }
    }

    /// First tick after the last laid-down bit
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of level changes
    pub fn transitions(&self) -> usize {
        self.segments.len()
    }
}

/// Builder for [`Waveform`]
pub struct WaveformBuilder<const N: usize> {
    /// Bit period is `num / den` ticks
    num: u64,
    den: u64,
    /// Position in units of `1 / den` ticks
    cursor: u64,
    segments: Vec<Segment, N>,
    overflow: bool,
}

impl<const N: usize> WaveformBuilder<N> {
    /// Builder with a whole number of ticks per bit
    pub fn new(bit_ticks: u64) -> Self {
        Self::with_ratio(bit_ticks, 1)
    }

    /// Builder at the exact bit period of `baud_rate` on a `frequency` timer
    pub fn for_baud(frequency: u32, baud_rate: u32) -> Self {
        Self::with_ratio(frequency as u64, baud_rate.max(1) as u64)
    }

    fn with_ratio(num: u64, den: u64) -> Self {
        Self {
            num,
            den,
            cursor: 0,
            segments: Vec::new(),
            overflow: false,
        }
    }

    /// Current position in ticks
    pub fn position(&self) -> u64 {
        self.cursor / self.den
    }

    fn last_level(&self) -> bool {
        self.segments.last().map_or(true, |s| s.high)
    }

    fn set_level(&mut self, high: bool) {
        if self.last_level() != high {
            let start = self.position();
            if self.segments.push(Segment { start, high }).is_err() {
                self.overflow = true;
            }
        }
    }

    /// Hold `high` for `bits` bit periods
    pub fn level(&mut self, high: bool, bits: u32) -> &mut Self {
        if bits > 0 {
            self.set_level(high);
            self.cursor += self.num * bits as u64;
        }
        self
    }

    /// One bit period at `high`
    pub fn bit(&mut self, high: bool) -> &mut Self {
        self.level(high, 1)
    }

    /// One bit period per level
    pub fn bits(&mut self, levels: &[bool]) -> &mut Self {
        for &high in levels {
            self.bit(high);
        }
        self
    }

    /// Idle high for `bits` bit periods
    pub fn idle(&mut self, bits: u32) -> &mut Self {
        self.level(true, bits)
    }

    /// Idle high for a raw number of ticks
    pub fn idle_ticks(&mut self, ticks: u64) -> &mut Self {
        self.set_level(true);
        self.cursor += ticks * self.den;
        self
    }

    /// Lay down a well-formed frame
    pub fn frame(&mut self, config: &FrameConfig, data: u32) -> &mut Self {
        self.bits(&encode_frame(config, data))
    }

    /// Finish the waveform
    pub fn build(&self) -> Result<Waveform<N>, WaveformError> {
        if self.overflow {
            return Err(WaveformError::TooManySegments);
        }
        Ok(Waveform {
            segments: self.segments.clone(),
            end: self.position(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitrx_core::Parity;

    #[test]
    fn test_encode_8e1() {
        let config = FrameConfig::new(8, Parity::Even, 1);
        let bits = encode_frame(&config, 0x41);

        let expected = [
            false, // start
            true, false, false, false, false, false, true, false, // 0x41 LSB first
            false, // even parity: two ones
            true,  // stop
        ];
        assert_eq!(bits.as_slice(), &expected);
    }

    #[test]
    fn test_encode_odd_parity_two_stops() {
        let config = FrameConfig::new(7, Parity::Odd, 2);
        let bits = encode_frame(&config, 0b000_0111);

        assert_eq!(bits.len(), 11);
        // Three ones: odd parity bit is 0
        assert!(!bits[8]);
        assert!(bits[9] && bits[10]);
    }

    #[test]
    fn test_encode_ignores_bits_above_width() {
        let config = FrameConfig::new(4, Parity::None, 1);
        let bits = encode_frame(&config, 0xF0);
        assert_eq!(bits.as_slice(), &[false, false, false, false, false, true]);
    }

    #[test]
    fn test_level_at() {
        let mut builder = WaveformBuilder::<8>::new(10);
        builder.idle(1).bit(false).bit(false).bit(true).bit(false);
        let waveform = builder.build().unwrap();

        assert!(waveform.level_at(0));
        assert!(waveform.level_at(9));
        assert!(!waveform.level_at(10));
        assert!(!waveform.level_at(29));
        assert!(waveform.level_at(30));
        assert!(!waveform.level_at(45));
        // Idle high after the end
        assert!(waveform.level_at(50));
        assert!(waveform.level_at(10_000));

        assert_eq!(waveform.end(), 50);
        assert_eq!(waveform.transitions(), 3);
    }

    #[test]
    fn test_fractional_bit_period() {
        // 1 MHz timer, 9600 baud: 104.1666... ticks per bit
        let mut builder = WaveformBuilder::<4>::for_baud(1_000_000, 9600);
        builder.idle(12);
        assert_eq!(builder.position(), 1250);
        builder.bit(false);
        assert_eq!(builder.position(), 1354);
    }

    #[test]
    fn test_overflow() {
        let mut builder = WaveformBuilder::<2>::new(10);
        builder.bits(&[false, true, false]);
        assert_eq!(builder.build().unwrap_err(), WaveformError::TooManySegments);
    }
}
