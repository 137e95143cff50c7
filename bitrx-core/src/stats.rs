//! Receive statistics

use crate::decoder::DecodedFrame;

/// Running counters kept by the receive loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReceiveStats {
    /// Frames decoded
    pub frames: u32,
    /// Frames with a start bit error
    pub start_bit_errors: u32,
    /// Frames with a parity error
    pub parity_errors: u32,
    /// Stop bits that sampled low, over all frames
    pub stop_bit_errors: u32,
    /// Frames with at least one error
    pub error_frames: u32,
}

impl ReceiveStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one decoded frame
    pub fn record(&mut self, frame: &DecodedFrame) {
        self.frames = self.frames.saturating_add(1);
        if frame.start_bit_error {
            self.start_bit_errors = self.start_bit_errors.saturating_add(1);
        }
        if frame.parity_error {
            self.parity_errors = self.parity_errors.saturating_add(1);
        }
        self.stop_bit_errors = self
            .stop_bit_errors
            .saturating_add(frame.stop_bit_error_count());
        if frame.has_errors() {
            self.error_frames = self.error_frames.saturating_add(1);
        }
    }

    /// Frames decoded without any error
    pub fn clean_frames(&self) -> u32 {
        self.frames - self.error_frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut stats = ReceiveStats::new();

        let mut clean = DecodedFrame::new();
        clean.stop_bit_errors.push(false).unwrap();
        stats.record(&clean);

        let mut bad = DecodedFrame::new();
        bad.start_bit_error = true;
        bad.parity_error = true;
        bad.stop_bit_errors.push(true).unwrap();
        bad.stop_bit_errors.push(true).unwrap();
        stats.record(&bad);

        assert_eq!(stats.frames, 2);
        assert_eq!(stats.start_bit_errors, 1);
        assert_eq!(stats.parity_errors, 1);
        assert_eq!(stats.stop_bit_errors, 2);
        assert_eq!(stats.error_frames, 1);
        assert_eq!(stats.clean_frames(), 1);
    }

    #[test]
    fn test_saturates() {
        let mut stats = ReceiveStats {
            frames: u32::MAX,
            ..Default::default()
        };
        stats.record(&DecodedFrame::new());
        assert_eq!(stats.frames, u32::MAX);
    }
}
