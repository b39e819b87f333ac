#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Writes records to stderr so they never interleave with the boards
/// printed on stdout.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `SEABATTLE_LOG`, falling back to `info` when unset or invalid.
fn log_level_from_env() -> LevelFilter {
    env::var("SEABATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level taken from the environment.
/// Calling it again is harmless.
pub fn init_logging() {
    let level = log_level_from_env();
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
