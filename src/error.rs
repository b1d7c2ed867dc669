//! The fatal conditions that stop the shim before (or while) clang-tidy runs.

use std::io;
use std::path::PathBuf;

// non-std crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShimError {
    #[error("could not find compile_commands.json in {}", dir.display())]
    MissingDatabase { dir: PathBuf },

    #[error("invalid shim configuration: {0}")]
    Config(#[from] clap::Error),

    #[error("not implemented for system: {0}")]
    UnsupportedPlatform(String),

    #[error("could not find {name}: {reason}")]
    ToolNotFound { name: String, reason: &'static str },

    #[error("failed to run clang-tidy: {0}")]
    Launch(#[from] io::Error),

    #[error("invalid exclusion pattern: {0}")]
    Pattern(#[from] regex::Error),
}
