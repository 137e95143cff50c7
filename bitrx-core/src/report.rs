//! Console report formatting
//!
//! Each frame produces one line per error followed by the data line:
//!
//! ```text
//! Error receiving the start bit
//! Parity error
//! Stop bit error (stop bit 1)
//! Data output: 65 - A
//! ```

use core::fmt::Write;

use heapless::String;

use crate::decoder::{DecodedFrame, FrameError};
use crate::traits::Console;

/// Maximum length of one report line
pub const REPORT_LINE_LEN: usize = 48;

/// A formatted report line
pub type ReportLine = String<REPORT_LINE_LEN>;

/// Printable form of a data value
///
/// Printable ASCII maps to itself, anything else to `'.'`.
pub fn printable(data: u32) -> char {
    match u8::try_from(data) {
        Ok(byte) if byte.is_ascii_graphic() || byte == b' ' => byte as char,
        _ => '.',
    }
}

/// Format the line for a frame error
pub fn format_error(error: FrameError) -> ReportLine {
    let mut line = ReportLine::new();
    // Longest message fits REPORT_LINE_LEN
    let _ = write!(line, "{}", error);
    line
}

/// Format the data line: decimal value and printable character
pub fn format_data(data: u32) -> ReportLine {
    let mut line = ReportLine::new();
    let _ = write!(line, "Data output: {} - {}", data, printable(data));
    line
}

/// Write all lines for one frame to the console
pub fn report_frame<C: Console>(console: &mut C, frame: &DecodedFrame) -> Result<(), C::Error> {
    for error in frame.errors() {
        console.write_line(&format_error(error))?;
    }
    console.write_line(&format_data(frame.data))
}
