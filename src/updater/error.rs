//! Error types for artifact discovery and manifest generation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for updater operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving versions, scanning bundles, or merging manifests
#[derive(Error, Debug)]
pub enum Error {
    /// IO error annotated with the action and the path it touched
    #[error("failed {context} at {}: {source}", .path.display())]
    Fs {
        /// What was being attempted (e.g. "reading signature file")
        context: &'static str,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// JSON parse or serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse failure
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Neither `tauri.conf.json` nor `Tauri.toml` exists
    #[error(
        "no Tauri configuration found in {}. Expected tauri.conf.json or Tauri.toml",
        .tauri_dir.display()
    )]
    ConfigNotFound {
        /// The `src-tauri` directory that was searched
        tauri_dir: PathBuf,
    },

    /// Configuration carries no version in any recognized field
    #[error(
        "could not find version in {}. Please ensure \"version\" is set",
        .config.display()
    )]
    MissingVersion {
        /// Config file that was read
        config: PathBuf,
    },

    /// A platform key already exists and no sanctioned overwrite rule applies
    #[error("platform entry already exists for key \"{key}\" (artifact: {file_name})")]
    PlatformCollision {
        /// Manifest key that collided
        key: String,
        /// File name of the artifact that tried to claim the key
        file_name: String,
    },

    /// Free-form error, produced by [`bail!`](crate::bail)
    #[error("{0}")]
    GenericError(String),

    /// Error wrapped with a higher-level explanation
    #[error("{context}: {source}")]
    Context {
        /// Explanation of what was being attempted
        context: String,
        /// Underlying error
        source: Box<Error>,
    },
}

/// Attach filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] carrying `context` and `path`.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Wrap any updater error with a message.
pub trait Context<T> {
    /// Wraps the error in [`Error::Context`].
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> Context<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}

/// Return early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::updater::Error::GenericError(format!($($arg)*)))
    };
}
