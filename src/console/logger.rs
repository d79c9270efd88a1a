//! Logger setup for the log crate.
//!
//! Log records go to stderr so they never interleave with the interactive
//! transcript on stdout.

use std::fmt::{self, Display};
use std::io::{IsTerminal, Write};

use anyhow::Context;
use env_logger::Builder;
use log::Level;

use crate::TinyResult;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    Red = 31,
    Green = 32,
    Yellow = 33,
    Cyan = 36,
    BrightBlack = 90,
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{1B}[{}m", *self as u8)
    }
}

fn level_color(level: Level) -> ColorCode {
    match level {
        Level::Error => ColorCode::Red,
        Level::Warn => ColorCode::Yellow,
        Level::Info => ColorCode::Green,
        Level::Debug => ColorCode::Cyan,
        Level::Trace => ColorCode::BrightBlack,
    }
}

/// Initialize the logger with an env_logger filter string such as `"warn"`
/// or `"tinyedit=debug"`.
pub fn init(filter: &str) -> TinyResult<()> {
    let colored = std::io::stderr().is_terminal();

    Builder::new()
        .parse_filters(filter)
        .format_timestamp(None)
        .format(move |buf, record| {
            let file = record.file().unwrap_or("none");
            let line = record.line().unwrap_or(0);
            if colored {
                let color = level_color(record.level());
                let reset = "\u{1B}[0m";
                writeln!(buf, "[{} {file}:{line}] {color}{}{reset}", record.level(), record.args())
            } else {
                writeln!(buf, "[{} {file}:{line}] {}", record.level(), record.args())
            }
        })
        .try_init()
        .context("Logger initialization failed")
}
