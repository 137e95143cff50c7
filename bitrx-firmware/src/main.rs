//! bitrx - Bit-banged UART receiver firmware
//!
//! Samples a GPIO line against the 1 MHz system timer, reconstructs each
//! frame and prints the decoded byte (or the frame errors) on UART0.
//!
//! Pin assignment (Raspberry Pi Pico):
//! - GPIO1: software receive line
//! - GPIO0: UART0 TX console

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use {defmt_rtt as _, panic_probe as _};

use bitrx_core::timing::measure_read_overhead;
use bitrx_core::{Receiver, TickTimer};
use bitrx_hal_rp2040::{GpioLine, InstantTimer, UartConsole};

mod config;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("bitrx firmware starting...");

    let p = embassy_rp::init(Default::default());

    let line = if config::LINE_INVERTED {
        GpioLine::new(Input::new(p.PIN_1, Pull::Down), true)
    } else {
        GpioLine::pull_up(p.PIN_1)
    };

    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, UartConfig::default());
    let console = UartConsole::new(tx);

    let mut timer = InstantTimer::new();
    let overhead = measure_read_overhead(&mut timer);
    info!(
        "Timer: {} Hz, read overhead {} ticks",
        timer.frequency(),
        overhead
    );

    let mut receiver = match Receiver::new(timer, line, console, &config::RECEIVER_CONFIG) {
        Ok(receiver) => receiver,
        Err(e) => {
            error!("Invalid receiver config: {}", e);
            loop {
                cortex_m::asm::wfi();
            }
        }
    };

    info!("Receiver config: {}", config::RECEIVER_CONFIG);
    info!("Timing: {}", receiver.timing());

    loop {
        match receiver.receive_frame() {
            Ok(frame) => {
                for error in frame.errors() {
                    warn!("Frame error: {}", error);
                }
                debug!("Received {=u32:#x}", frame.data);
            }
            Err(e) => warn!("Console write failed: {}", e),
        }

        let stats = receiver.stats();
        if stats.frames % config::STATS_INTERVAL_FRAMES == 0 {
            info!("Stats: {}", stats);
        }
    }
}
