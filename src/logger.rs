//! A module to initialize and customize the logger object that writes to stdout and stderr.

use std::env;
use std::io::{self, Write};

// non-std crates
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// Prints `LEVEL: message` lines.
///
/// Warnings and errors go to stderr so they stay apart from clang-tidy's echoed
/// stdout; everything else goes to stdout.
struct ShimLogger;

impl ShimLogger {
    fn to_stderr(level: Level) -> bool {
        level <= Level::Warn
    }
}

impl log::Log for ShimLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if Self::to_stderr(record.level()) {
            eprintln!("{}: {}", record.level(), record.args());
        } else {
            println!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}

/// A private constant to manage the application's logger object.
static LOGGER: ShimLogger = ShimLogger;

/// A function to initialize the private `LOGGER`.
///
/// The logging level defaults to [`LevelFilter::Info`].
/// Returns a [`SetLoggerError`] if the `LOGGER` is already initialized.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Info))
}

/// Sets the maximum level of log statements that get printed.
pub fn set_debug(debug: bool) {
    log::set_max_level(if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
}

fn is_ci() -> bool {
    env::var("GITHUB_ACTIONS").is_ok_and(|val| val == "true")
}

/// This prints a line to indicate the beginning of a related group of log statements.
///
/// Grouping is only understood by GitHub Actions, so nothing is printed elsewhere.
pub fn start_log_group(name: &str) {
    if is_ci() {
        println!("::group::{}", name);
    }
}

/// This prints a line to indicate the ending of a related group of log statements.
pub fn end_log_group() {
    if is_ci() {
        println!("::endgroup::");
    }
}
