//! RP2040-specific HAL for the bitrx receiver
//!
//! Implements the `bitrx-core` collaborator traits on RP2040 peripherals:
//!
//! - GPIO input as the receive line
//! - embassy-time tick counter as the sampling timer
//! - Blocking UART TX as the console

#![no_std]

pub mod console;
pub mod line;
pub mod timer;

pub use console::UartConsole;
pub use line::GpioLine;
pub use timer::InstantTimer;
