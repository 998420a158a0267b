//! Updater manifest generation for Tauri bundle outputs.
//!
//! # Overview
//!
//! 1. [`scanner`] walks `src-tauri/target/**/release/bundle/` and pairs every
//!    installer known to the [`catalog`] with its `.sig` file.
//! 2. [`keys`] turns each [`Artifact`] into its platform keys.
//! 3. [`generator`] merges the artifacts into the existing `latest.json` and
//!    stamps version, date and notes.
//!
//! # Example
//!
//! ```no_run
//! use tauri_updater_json::updater::{self, GenerateOptions, ProjectLayout};
//! use std::path::Path;
//!
//! # async fn example() -> updater::Result<()> {
//! let layout = ProjectLayout::new("my-app");
//! let report = updater::find_artifacts(&layout).await?;
//!
//! let output_dir = Path::new("dist");
//! let manifest = updater::generate_manifest(
//!     &report.artifacts,
//!     &GenerateOptions {
//!         version: "1.2.0",
//!         base_url: "https://cdn.example.com/{version}/",
//!         output_dir,
//!         notes: None,
//!         allow_overwrite: false,
//!     },
//! )
//! .await?;
//! updater::write_manifest(&manifest, output_dir).await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod generator;
pub mod keys;
pub mod project;
pub mod scanner;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use generator::{GenerateOptions, generate_manifest, load_manifest, write_manifest};
pub use project::ProjectLayout;
pub use scanner::{ScanReport, SkipReason, SkippedCandidate, find_artifacts, search_directories};
pub use types::{Arch, Artifact, BundleType, Manifest, Os, PlatformEntry};
