//! This is the tidy-shim package's binary executable's source code.
//!
//! Notice how similar this is compared to the python binding's `tidy_shim.run.main()`.

use std::{env, process::ExitCode};

// project specific modules/crates
use tidy_shim::run::run_main;

/// This takes the CLI arguments and passes them to [`tidy_shim::run::run_main`].
pub fn main() -> ExitCode {
    let status = run_main(env::args().collect::<Vec<String>>());
    // statuses outside of 0..=255 cannot be reported portably
    ExitCode::from(u8::try_from(status).unwrap_or(1))
}
