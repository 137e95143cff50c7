//! Board-agnostic core logic for the bitrx software UART receiver
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - Collaborator traits (tick timer, line sampler, console output)
//! - Frame configuration and build-time defaults
//! - Bit timing derivation
//! - Frame decoder state machine
//! - Receive loop, report formatting and statistics
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Receiver (receive loop, reporting)      │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │  FrameDecoder (IDLE → ... → COMPLETE)    │
//! └──────────────────────────────────────────┘
//!             │                   │
//!             ▼                   ▼
//!     ┌──────────────┐    ┌──────────────┐
//!     │  TickTimer   │    │ LineSampler  │
//!     └──────────────┘    └──────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod decoder;
pub mod receiver;
pub mod report;
pub mod stats;
pub mod timing;
pub mod traits;

pub use config::{
    ConfigError, EdgePolicy, FrameConfig, Parity, ReceiverConfig, TimingMode,
    DEFAULT_RECEIVER_CONFIG,
};
pub use decoder::{DecodeState, DecodedFrame, FrameDecoder, FrameError};
pub use receiver::Receiver;
pub use stats::ReceiveStats;
pub use timing::TimingProfile;
pub use traits::{Console, LineSampler, TickTimer};
