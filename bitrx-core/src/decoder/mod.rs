//! Frame decoder
//!
//! Drives a [`TickTimer`](crate::traits::TickTimer) and a
//! [`LineSampler`](crate::traits::LineSampler) through the timed samples of
//! one serial frame. Bit errors are recorded on the returned frame; decoding
//! always runs to completion once a start condition has been seen.

pub mod frame;
pub mod frame_decoder;
pub mod state;

pub use frame::{DecodedFrame, FrameError, StopBitErrors};
pub use frame_decoder::FrameDecoder;
pub use state::DecodeState;
