//! Build-time receiver configuration
//!
//! Generated by build.rs from receiver.toml. Edit receiver.toml and
//! rebuild to customize.

use bitrx_core::{EdgePolicy, FrameConfig, Parity, ReceiverConfig, TimingMode};

include!(concat!(env!("OUT_DIR"), "/receiver_config.rs"));

const _: () = assert!(RECEIVER_CONFIG.validate().is_ok());
const _: () = assert!(STATS_INTERVAL_FRAMES > 0);
