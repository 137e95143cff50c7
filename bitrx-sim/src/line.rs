//! Simulated receive line

use bitrx_core::LineSampler;

use crate::clock::SimClock;
use crate::waveform::Waveform;

/// Line whose level follows a [`Waveform`] at the current clock tick
pub struct WaveformLine<'a, const N: usize> {
    clock: &'a SimClock,
    waveform: &'a Waveform<N>,
    reads: u32,
}

impl<'a, const N: usize> WaveformLine<'a, N> {
    pub fn new(clock: &'a SimClock, waveform: &'a Waveform<N>) -> Self {
        Self {
            clock,
            waveform,
            reads: 0,
        }
    }

    /// Number of reads so far
    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl<const N: usize> LineSampler for WaveformLine<'_, N> {
    fn is_high(&mut self) -> bool {
        let level = self.waveform.level_at(self.clock.now());
        self.clock.tick();
        self.reads += 1;
        level
    }
}
