//! Configuration types
//!
//! Frame shape and baud rate are fixed at build time. The firmware build
//! script generates a `ReceiverConfig` constant from `receiver.toml`.

pub mod frame;
pub mod receiver;

pub use frame::*;
pub use receiver::*;
