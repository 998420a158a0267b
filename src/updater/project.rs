//! Conventional Tauri project layout.

use std::path::{Path, PathBuf};

/// Directory holding the Rust side of a Tauri project.
pub const TAURI_DIR: &str = "src-tauri";
/// JSON configuration file name.
pub const JSON_CONFIG_FILE: &str = "tauri.conf.json";
/// TOML configuration file name.
pub const TOML_CONFIG_FILE: &str = "Tauri.toml";
/// Host build profile directories under `target/`.
pub const PROFILE_DIRS: [&str; 2] = ["release", "debug"];

/// Paths derived from a Tauri project root.
#[derive(Clone, Debug)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Creates a layout rooted at the directory that contains `src-tauri/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `src-tauri/`
    pub fn tauri_dir(&self) -> PathBuf {
        self.root.join(TAURI_DIR)
    }

    /// `src-tauri/target/`
    pub fn target_dir(&self) -> PathBuf {
        self.tauri_dir().join("target")
    }

    /// `src-tauri/target/release/bundle/`, where a host build writes installers.
    pub fn default_bundle_dir(&self) -> PathBuf {
        Self::bundle_dir_of(&self.target_dir().join("release"))
    }

    /// `<profile_dir>/bundle/`
    pub fn bundle_dir_of(profile_dir: &Path) -> PathBuf {
        profile_dir.join("bundle")
    }

    /// `src-tauri/tauri.conf.json`
    pub fn json_config_path(&self) -> PathBuf {
        self.tauri_dir().join(JSON_CONFIG_FILE)
    }

    /// `src-tauri/Tauri.toml`
    pub fn toml_config_path(&self) -> PathBuf {
        self.tauri_dir().join(TOML_CONFIG_FILE)
    }
}
