//! UART console
//!
//! Decoded bytes and frame errors are printed on a hardware UART. Any
//! blocking `embedded-io` writer works; the firmware passes an embassy
//! `UartTx` in blocking mode.

use bitrx_core::Console;
use embedded_io::Write;

/// Line terminator appended to every line
pub const LINE_ENDING: &[u8] = b"\r\n";

/// Console over a blocking byte writer
pub struct UartConsole<W> {
    tx: W,
}

impl<W: Write> UartConsole<W> {
    pub fn new(tx: W) -> Self {
        Self { tx }
    }

    /// Release the writer
    pub fn free(self) -> W {
        self.tx
    }
}

impl<W: Write> Console for UartConsole<W> {
    type Error = W::Error;

    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        self.tx.write_all(line.as_bytes())?;
        self.tx.write_all(LINE_ENDING)?;
        self.tx.flush()
    }
}
