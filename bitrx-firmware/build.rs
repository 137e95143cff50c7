//! Build script for bitrx-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates receiver.toml and compiles it into `receiver_config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// embassy-time tick rate on RP2040
const TIMER_HZ: i64 = 1_000_000;

/// Lowest sampling resolution: two ticks per bit
const MAX_BAUD_RATE: i64 = TIMER_HZ / 2;

const MAX_DATA_BITS: i64 = 32;
const MAX_STOP_BITS: i64 = 4;

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Receiver settings as read from receiver.toml
struct Settings {
    inverted: bool,
    baud_rate: i64,
    data_bits: i64,
    parity: &'static str,
    stop_bits: i64,
    edge_policy: &'static str,
    timing_mode: &'static str,
    stats_interval_frames: i64,
}

/// Validate receiver.toml and write the generated constants to OUT_DIR
fn generate_config() {
    println!("cargo:rerun-if-changed=receiver.toml");

    let config_path = Path::new("receiver.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: receiver.toml not found!                                 ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a receiver.toml configuration file.       ║\n\
            ║  Please create one in the bitrx-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read receiver.toml                             ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in receiver.toml                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let settings = validate(&config);

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("receiver_config.rs")).unwrap();
    f.write_all(render(&settings).as_bytes()).unwrap();

    println!("cargo:warning=receiver.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn integer(
    table: Option<&toml::Value>,
    section: &str,
    key: &str,
    default: i64,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) -> i64 {
    match table.and_then(|t| t.get(key)) {
        None => default,
        Some(toml::Value::Integer(v)) if range.contains(v) => *v,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!(
                "[{}] {} must be {}-{}",
                section,
                key,
                range.start(),
                range.end()
            ));
            default
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            default
        }
    }
}

fn choice(
    table: Option<&toml::Value>,
    section: &str,
    key: &str,
    options: &[&'static str],
    errors: &mut Vec<String>,
) -> &'static str {
    match table.and_then(|t| t.get(key)) {
        None => options[0],
        Some(toml::Value::String(s)) => match options.iter().find(|o| **o == s.as_str()) {
            Some(option) => *option,
            None => {
                errors.push(format!(
                    "[{}] {} must be one of: {}",
                    section,
                    key,
                    options.join(", ")
                ));
                options[0]
            }
        },
        Some(_) => {
            errors.push(format!("[{}] {} must be a string", section, key));
            options[0]
        }
    }
}

/// Check every receiver.toml field, collecting all problems before failing
fn validate(config: &toml::Value) -> Settings {
    let mut errors = Vec::new();

    let line = config.get("line");
    let frame = config.get("frame");
    let report = config.get("report");

    for (name, section) in [("line", line), ("frame", frame), ("report", report)] {
        if let Some(value) = section {
            if !value.is_table() {
                errors.push(format!("[{}] must be a table", name));
            }
        }
    }

    let inverted = match line.and_then(|t| t.get("inverted")) {
        None => false,
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => {
            errors.push("[line] inverted must be true or false".to_string());
            false
        }
    };

    let settings = Settings {
        inverted,
        baud_rate: integer(frame, "frame", "baud_rate", 10_000, 1..=MAX_BAUD_RATE, &mut errors),
        data_bits: integer(frame, "frame", "data_bits", 8, 1..=MAX_DATA_BITS, &mut errors),
        parity: choice(frame, "frame", "parity", &["even", "odd", "none"], &mut errors),
        stop_bits: integer(frame, "frame", "stop_bits", 1, 1..=MAX_STOP_BITS, &mut errors),
        edge_policy: choice(
            frame,
            "frame",
            "edge_policy",
            &["sample_until_low", "idle_then_low"],
            &mut errors,
        ),
        timing_mode: choice(
            frame,
            "frame",
            "timing_mode",
            &["restart_per_bit", "absolute_deadline"],
            &mut errors,
        ),
        stats_interval_frames: integer(
            report,
            "report",
            "stats_interval_frames",
            256,
            1..=u32::MAX as i64,
            &mut errors,
        ),
    };

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid receiver configuration                           ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    settings
}

fn render(s: &Settings) -> String {
    let parity = match s.parity {
        "odd" => "Odd",
        "none" => "None",
        _ => "Even",
    };
    let edge_policy = match s.edge_policy {
        "idle_then_low" => "IdleThenLow",
        _ => "SampleUntilLow",
    };
    let timing_mode = match s.timing_mode {
        "absolute_deadline" => "AbsoluteDeadline",
        _ => "RestartPerBit",
    };

    format!(
        "// Generated by build.rs from receiver.toml\n\
         \n\
         /// Line and frame settings\n\
         pub const RECEIVER_CONFIG: ReceiverConfig = ReceiverConfig::new(\n\
         \x20   {baud},\n\
         \x20   FrameConfig::new({data}, Parity::{parity}, {stop})\n\
         \x20       .with_edge_policy(EdgePolicy::{edge_policy})\n\
         \x20       .with_timing_mode(TimingMode::{timing_mode}),\n\
         );\n\
         \n\
         /// Receive line sits behind an inverting transceiver\n\
         pub const LINE_INVERTED: bool = {inverted};\n\
         \n\
         /// Frames between statistics log lines\n\
         pub const STATS_INTERVAL_FRAMES: u32 = {interval};\n",
        baud = s.baud_rate,
        data = s.data_bits,
        stop = s.stop_bits,
        inverted = s.inverted,
        interval = s.stats_interval_frames,
    )
}
