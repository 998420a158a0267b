//! Command line argument parsing and validation.

use crate::updater::generator::apply_version_placeholder;
use clap::Parser;
use path_absolutize::Absolutize;
use std::path::PathBuf;

/// Generate latest.json for the Tauri v2 updater
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tauri-updater-json",
    version,
    about = "Generate latest.json for the Tauri updater",
    long_about = "Scans a Tauri project's bundle output for signed updater artifacts, copies them
to the output directory, and writes (or merges into) <output-dir>/latest.json.

Usage:
  tauri-updater-json --tauri-project . --output-dir dist --base-url https://cdn.example.com/{version}/
  tauri-updater-json --tauri-project app --output-dir dist --base-url https://x/ --notes \"Bug fixes\"

Exit code 0 = latest.json written. Exit code 1 = nothing written."
)]
pub struct Args {
    /// Path to the Tauri project directory (the one containing src-tauri/)
    #[arg(long, value_name = "PATH", env = "TAURI_PROJECT")]
    pub tauri_project: PathBuf,

    /// Output directory for latest.json and the copied artifacts
    #[arg(long, value_name = "PATH", env = "UPDATER_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Base URL for artifact downloads
    ///
    /// `{version}`, `${version}` and `{{version}}` are replaced with the
    /// project version.
    #[arg(long, value_name = "URL", env = "UPDATER_BASE_URL")]
    pub base_url: String,

    /// Release notes (defaults to the notes of an existing latest.json)
    #[arg(long, value_name = "STRING", env = "UPDATER_NOTES")]
    pub notes: Option<String>,

    /// Allow overwriting existing platform entries in latest.json
    #[arg(long, env = "UPDATER_ALLOW_OVERWRITE")]
    pub allow_overwrite_platforms: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Base URL cannot be empty".to_string());
        }
        if self.tauri_project.as_os_str().is_empty() {
            return Err("Tauri project path cannot be empty".to_string());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Validates the base URL once the version is known.
pub fn validate_base_url(base_url: &str, version: &str) -> Result<(), String> {
    let resolved = apply_version_placeholder(base_url, version);
    url::Url::parse(&resolved)
        .map(|_| ())
        .map_err(|e| format!("Base URL \"{}\" is not a valid URL: {}", resolved, e))
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Absolute project root
    pub tauri_project: PathBuf,
    /// Absolute output directory
    pub output_dir: PathBuf,
    /// Base URL as given
    pub base_url: String,
    /// Release notes
    pub notes: Option<String>,
    /// Overwrite occupied platform keys
    pub allow_overwrite_platforms: bool,
}

impl TryFrom<&Args> for RuntimeConfig {
    type Error = std::io::Error;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        Ok(Self {
            tauri_project: args.tauri_project.absolutize()?.into_owned(),
            output_dir: args.output_dir.absolutize()?.into_owned(),
            base_url: args.base_url.clone(),
            notes: args.notes.clone(),
            allow_overwrite_platforms: args.allow_overwrite_platforms,
        })
    }
}
