//! This module holds the design of the shim's own settings.
//!
//! The command line of the shim belongs to clang-tidy, so none of these options are
//! read from it. Each option is backed by an environment variable, and the parser is
//! fed only the program name (see [`crate::config::ShimConfig::from_env`]).

// non-std crates
use clap::{Arg, Command};

/// The environment variable that CI jobs set to bypass clang-tidy entirely.
pub const SKIP_ENV: &str = "POCC_SHIM_SKIP_CLANG_TIDY";

/// Builds and returns the argument parsing object for the shim's settings.
pub fn get_arg_parser() -> Command {
    Command::new("tidy-shim")
        .arg(
            Arg::new("skip")
                .long("skip")
                .env(SKIP_ENV)
                .default_value("")
                .value_parser(parse_skip)
                .long_help(
                    "Set this to ``true``, ``yes`` or ``1`` to skip clang-tidy and exit
successfully. This allows jobs that only need auto-formatting to complete faster.
",
                ),
        )
        .arg(
            Arg::new("exclude-ext")
                .long("exclude-ext")
                .env("TIDY_SHIM_EXCLUDE_EXT")
                .value_delimiter(',')
                .default_value(".h")
                .long_help(
                    "A comma-separated list of file extensions that are never passed to
clang-tidy. Set this to a blank string (``''``) to keep all extensions.
",
                ),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .env("TIDY_SHIM_CLANG_VERSION")
                .default_value("")
                .long_help(
                    "The desired version of clang-tidy to use.

- Set this option to a blank string (``''``) to use the
  platform's default installed version.
- This value can also be a path to where the clang tools are
  installed (if using a custom install location).
",
                ),
        )
        .arg(
            Arg::new("database-dir")
                .long("database-dir")
                .env("TIDY_SHIM_DATABASE_DIR")
                .default_value(".")
                .long_help(
                    "The directory expected to contain compile_commands.json.
Generating the project with CMake creates this file.
",
                ),
        )
        .arg(
            Arg::new("verbosity")
                .long("verbosity")
                .env("TIDY_SHIM_VERBOSITY")
                .default_value("info")
                .value_parser(["debug", "info"])
                .long_help("This controls the verbosity of the shim's own log output.\n"),
        )
}

/// Interprets the value of [`SKIP_ENV`].
///
/// Only `true` and `yes` (in any case) or exactly `1` enable skipping. Every other
/// value, including a blank one, does not.
pub fn parse_skip(val: &str) -> Result<bool, String> {
    Ok(val.eq_ignore_ascii_case("true") || val.eq_ignore_ascii_case("yes") || val == "1")
}
