//! Capturing console

use heapless::Vec;

use bitrx_core::report::ReportLine;
use bitrx_core::Console;

/// Console errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureError {
    /// All `N` line slots are used
    Full,
    /// Line longer than a report line
    LineTooLong,
}

/// Console that keeps up to `N` lines in memory
///
/// Once full, writes fail with [`CaptureError::Full`], which ends
/// [`Receiver::run`](bitrx_core::Receiver::run).
#[derive(Debug, Default)]
pub struct CaptureConsole<const N: usize> {
    lines: Vec<ReportLine, N>,
}

impl<const N: usize> CaptureConsole<N> {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Captured lines, oldest first
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|l| l.as_str())
    }

    /// Line `idx`, if captured
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(|l| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl<const N: usize> Console for CaptureConsole<N> {
    type Error = CaptureError;

    fn write_line(&mut self, line: &str) -> Result<(), CaptureError> {
        let mut owned = ReportLine::new();
        owned
            .push_str(line)
            .map_err(|_| CaptureError::LineTooLong)?;
        self.lines.push(owned).map_err(|_| CaptureError::Full)
    }
}
