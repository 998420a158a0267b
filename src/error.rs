//! Top-level error types for the command line tool.
//!
//! Every fatal condition ends up here and is printed once by `main` before the
//! process exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type of the tool
#[derive(Error, Debug)]
pub enum AppError {
    /// CLI argument and pipeline errors
    #[error(transparent)]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration, discovery and manifest errors
    #[error(transparent)]
    Updater(#[from] crate::updater::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// The build produced no signed installer in any bundle directory
    #[error(
        "No artifacts found in {}. Make sure you have built the Tauri app with updater artifacts enabled.",
        format_dirs(.searched)
    )]
    NoArtifacts {
        /// Bundle roots that were scanned
        searched: Vec<PathBuf>,
    },

    /// Command execution failed
    #[error("{command} failed: {reason}")]
    ExecutionFailed {
        /// Step that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

fn format_dirs(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
