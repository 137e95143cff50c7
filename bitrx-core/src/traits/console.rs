//! Console output abstraction
//!
//! The console is where decoded bytes and frame diagnostics are printed.
//! It is a plain line sink, separate from defmt logging.

/// Line-oriented text sink
pub trait Console {
    /// Error type for write operations
    type Error;

    /// Write one line of text
    ///
    /// Implementations append their own line terminator.
    fn write_line(&mut self, line: &str) -> Result<(), Self::Error>;
}

impl<T: Console + ?Sized> Console for &mut T {
    type Error = T::Error;

    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        T::write_line(self, line)
    }
}
