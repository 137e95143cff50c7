//! Receive loop
//!
//! Repeatedly waits for a start bit, decodes one frame and reports it on
//! the console. There is no shutdown path: [`Receiver::run`] only returns
//! if the console fails.

use core::convert::Infallible;

use crate::config::{ConfigError, ReceiverConfig};
use crate::decoder::{DecodedFrame, FrameDecoder};
use crate::report;
use crate::stats::ReceiveStats;
use crate::timing::TimingProfile;
use crate::traits::{Console, LineSampler, TickTimer};

/// Software UART receiver
pub struct Receiver<T, L, C> {
    decoder: FrameDecoder<T, L>,
    console: C,
    stats: ReceiveStats,
}

impl<T, L, C> Receiver<T, L, C>
where
    T: TickTimer,
    L: LineSampler,
    C: Console,
{
    /// Create a receiver
    ///
    /// Reads the timer frequency once and derives the timing profile from it.
    pub fn new(
        timer: T,
        line: L,
        console: C,
        config: &ReceiverConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let timing = TimingProfile::derive(timer.frequency(), config.baud_rate, &config.frame)?;
        let decoder = FrameDecoder::new(timer, line, config.frame, timing)?;

        Ok(Self {
            decoder,
            console,
            stats: ReceiveStats::new(),
        })
    }

    /// Derived timing profile
    pub fn timing(&self) -> &TimingProfile {
        self.decoder.timing()
    }

    /// Counters since creation
    pub fn stats(&self) -> &ReceiveStats {
        &self.stats
    }

    /// Console sink
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Mutable console sink
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Release the timer, line and console
    pub fn into_parts(self) -> (T, L, C) {
        let (timer, line) = self.decoder.into_parts();
        (timer, line, self.console)
    }

    /// Receive and report one frame
    ///
    /// Statistics are updated before reporting, so a console failure does
    /// not lose the frame from the counters.
    pub fn receive_frame(&mut self) -> Result<DecodedFrame, C::Error> {
        let frame = self.decoder.decode();
        self.stats.record(&frame);
        report::report_frame(&mut self.console, &frame)?;
        Ok(frame)
    }

    /// Receive frames forever
    pub fn run(&mut self) -> Result<Infallible, C::Error> {
        loop {
            self.receive_frame()?;
        }
    }
}
