//! The resolved settings of a single shim run.

use std::path::PathBuf;

// non-std crates
use clap::ArgMatches;

// project specific modules/crates
use crate::cli::get_arg_parser;
use crate::error::ShimError;

/// Settings that control the shim itself (never forwarded to clang-tidy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimConfig {
    /// Bypass clang-tidy and report success.
    pub skip: bool,

    /// Extensions of files that are removed from the candidate files.
    pub exclude_extensions: Vec<String>,

    /// The clang-tidy version number or install directory. Blank means "use `PATH`".
    pub version: String,

    /// The directory expected to hold compile_commands.json.
    pub database_dir: PathBuf,

    /// Enables debug level log output.
    pub debug: bool,
}

impl Default for ShimConfig {
    fn default() -> Self {
        ShimConfig {
            skip: false,
            exclude_extensions: vec![String::from(".h")],
            version: String::new(),
            database_dir: PathBuf::from("."),
            debug: false,
        }
    }
}

impl ShimConfig {
    /// Reads the settings from the process' environment variables.
    pub fn from_env() -> Result<Self, ShimError> {
        let args = get_arg_parser().try_get_matches_from(["tidy-shim"])?;
        Ok(Self::from_matches(&args))
    }

    /// Converts parsed matches of [`get_arg_parser()`] into a [`ShimConfig`].
    pub fn from_matches(args: &ArgMatches) -> Self {
        let exclude_extensions = args
            .get_many::<String>("exclude-ext")
            .map(|exts| {
                exts.filter(|ext| !ext.trim().is_empty())
                    .map(|ext| ext.trim().to_string())
                    .collect()
            })
            .unwrap_or_default();
        ShimConfig {
            skip: args.get_one::<bool>("skip").copied().unwrap_or(false),
            exclude_extensions,
            version: args
                .get_one::<String>("version")
                .cloned()
                .unwrap_or_default(),
            database_dir: args
                .get_one::<String>("database-dir")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            debug: args
                .get_one::<String>("verbosity")
                .is_some_and(|v| v == "debug"),
        }
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::ShimConfig;
    use crate::cli::get_arg_parser;

    fn config_from(input: Vec<&str>) -> ShimConfig {
        let args = get_arg_parser().try_get_matches_from(input).unwrap();
        ShimConfig::from_matches(&args)
    }

    #[test]
    fn explicit_settings() {
        let config = config_from(vec![
            "tidy-shim",
            "--skip=1",
            "--exclude-ext=.h, hpp ,",
            "--version=16",
            "--database-dir=build",
            "--verbosity=debug",
        ]);
        assert_eq!(
            config,
            ShimConfig {
                skip: true,
                exclude_extensions: vec![String::from(".h"), String::from("hpp")],
                version: String::from("16"),
                database_dir: PathBuf::from("build"),
                debug: true,
            }
        );
    }

    #[test]
    fn blank_extensions_disable_filter() {
        let config = config_from(vec!["tidy-shim", "--exclude-ext="]);
        assert!(config.exclude_extensions.is_empty());
    }

    #[test]
    fn default_config() {
        let config = ShimConfig::default();
        assert!(!config.skip);
        assert_eq!(config.exclude_extensions, [".h"]);
        assert_eq!(config.database_dir, PathBuf::from("."));
    }
}
