//! This module is the native backend of the tidy-shim package.
//!
//! In python, this module is exposed as `tidy_shim.run` that has 1 function exposed:
//! `main()`.

use std::env;
use std::path::Path;

// project specific modules/crates
use crate::clang_tidy::{get_clang_tool_exe, run_clang_tidy};
use crate::cli::SKIP_ENV;
use crate::common_fs::{count_compilation_units, find_compilation_database};
use crate::config::ShimConfig;
use crate::error::ShimError;
use crate::filter::{filter_files_by_ext, filter_files_by_folder, split_args};
use crate::logger;
use crate::platform::Platform;

/// This is the backend entry point for console applications.
///
/// The given `args` are the full command line (including the program name at index 0).
/// Source files for the other platform (and headers, by default) are removed from
/// them, and the rest is forwarded to clang-tidy. The returned value is meant to be
/// used as the process' exit status.
pub fn run_main(args: Vec<String>) -> i32 {
    // The python binding may call this more than once in the same process.
    let _ = logger::init();

    let config = match ShimConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return 1;
        }
    };
    logger::set_debug(config.debug);
    run_shim(&args, &config, Platform::host())
}

/// Runs the shim with explicit settings.
///
/// The `platform` is only consulted after the skip flag and the compilation database
/// are checked, so that an unsupported host can still skip clang-tidy.
///
/// If filtering leaves no candidate files, clang-tidy is not invoked at all and `0` is
/// returned (clang-tidy would otherwise fail with "no input files").
pub fn run_shim(
    args: &[String],
    config: &ShimConfig,
    platform: Result<Platform, ShimError>,
) -> i32 {
    if config.skip {
        log::info!(
            "Environment variable {SKIP_ENV}={}",
            env::var(SKIP_ENV).unwrap_or_default()
        );
        log::info!("Skipping clang-tidy.");
        return 0;
    }

    let db_path = match find_compilation_database(&config.database_dir) {
        Ok(db_path) => db_path,
        Err(e) => {
            report_missing_database(&config.database_dir, &platform, &e);
            return 1;
        }
    };
    if let Some(count) = count_compilation_units(&db_path) {
        log::debug!("{} lists {count} translation units", db_path.display());
    } else {
        log::warn!("Could not parse {}", db_path.display());
    }

    match filter_and_run(args, config, platform) {
        Ok(status) => status,
        Err(e) => {
            log::error!("{e}");
            1
        }
    }
}

fn report_missing_database(
    dir: &Path,
    platform: &Result<Platform, ShimError>,
    err: &ShimError,
) {
    if let Ok(cwd) = env::current_dir() {
        log::error!("Current Working Directory: {}", cwd.display());
    }
    log::error!("{err}");
    if dir != Path::new(".") {
        log::error!("Database directory: {}", dir.display());
    }
    log::error!("Generating the project with CMake creates compile_commands.json.");
    if let Ok(platform) = platform {
        log::error!("{}", platform.database_hint());
    }
}

fn filter_and_run(
    args: &[String],
    config: &ShimConfig,
    platform: Result<Platform, ShimError>,
) -> Result<i32, ShimError> {
    let platform = platform?;
    let mut filtered = filter_files_by_folder(platform.excluded_folder(), args)?;
    for ext in &config.exclude_extensions {
        filtered = filter_files_by_ext(ext, &filtered)?;
    }

    let (_, files) = split_args(&filtered);
    if files.is_empty() {
        log::info!("No files left for clang-tidy to analyze.");
        return Ok(0);
    }
    log::debug!("Giving attention to the following files:");
    for file in &files {
        log::debug!("  {file}");
    }

    let exe = get_clang_tool_exe("clang-tidy", &config.version)?;
    run_clang_tidy(&exe, &filtered)
}
