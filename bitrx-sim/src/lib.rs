//! Simulated collaborators for the bitrx receiver
//!
//! Everything here runs against a [`SimClock`]: a tick counter shared by
//! reference between the timer and the line. Every timer or line read
//! advances the clock, so spin-waits make progress and the line level is
//! always the waveform level at the current simulated instant.
//!
//! ```text
//!              ┌────────────┐
//!              │  SimClock  │
//!              └────────────┘
//!           ▲                  ▲
//!           │                  │
//!   ┌──────────────┐   ┌──────────────────┐     ┌──────────┐
//!   │   SimTimer   │   │   WaveformLine   │ ──▶ │ Waveform │
//!   └──────────────┘   └──────────────────┘     └──────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod console;
pub mod line;
pub mod timer;
pub mod waveform;

pub use clock::SimClock;
pub use console::{CaptureConsole, CaptureError};
pub use line::WaveformLine;
pub use timer::SimTimer;
pub use waveform::{encode_frame, FrameBits, Waveform, WaveformBuilder, WaveformError};
