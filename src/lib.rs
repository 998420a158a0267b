//! Updater manifest generator for Tauri applications
//!
//! This library discovers signed updater artifacts in a Tauri build tree and
//! produces the `latest.json` document consumed by the Tauri updater:
//! - Linux (AppImage, .deb, .rpm)
//! - macOS (.app.tar.gz, including universal builds)
//! - Windows (NSIS -setup.exe, .msi)
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod config;
pub mod error;
pub mod updater;

// Re-export commonly used types
pub use error::{AppError, CliError, Result};
