// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use anyhow::{Context, Result};
use clap::Parser;
use stacktrace_parser::{Stack, StackFrame};
use std::io::Write;
use std::path::PathBuf;

/// Parse a stack trace out of a crash log and print its canonical frames
/// and fingerprints.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a crash log file to parse.
    input: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let stack = Stack::from_text(&text);
    for frame in stack.frames() {
        log::info!("{}", format_frame(frame));
    }
    log::info!("Minor: {}", stack.minor().unwrap_or("-"));
    log::info!("Major: {}", stack.major().unwrap_or("-"));
    log::info!("Frames: {}", stack.frames().len());

    Ok(())
}

fn format_frame(frame: &StackFrame) -> String {
    let mut parts = Vec::new();
    if let Some(n) = frame.stack_line {
        parts.push(format!("{:02}", n));
    }
    if let Some(function) = &frame.function {
        parts.push(format!("function: '{}'", function));
    }
    if let Some(location) = &frame.location {
        parts.push(format!("location: '{}'", location));
    }
    if let Some(offset) = &frame.offset {
        parts.push(format!("offset: '{}'", offset));
    }
    parts.join(" - ")
}

/// Verbosity is toggled by the `DEBUG` environment variable (any non-empty
/// value enables debug logging), mirroring the original tool's
/// `basicConfig` call: info-only by default, a one-letter level tag
/// prefixed to each line once `DEBUG` is set.
fn init_logging() {
    let debug = std::env::var_os("DEBUG").is_some_and(|v| !v.is_empty());
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    if debug {
        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", &record.level().as_str()[..1], record.args())
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}
