//! Release version discovery from the Tauri project configuration.

use crate::updater::error::{Context, Error, ErrorExt, Result};
use crate::updater::project::ProjectLayout;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The parts of `tauri.conf.json` / `Tauri.toml` this tool reads.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TauriConfig {
    /// Top-level version (Tauri v2). May be a path to a `.json` file.
    #[serde(default)]
    pub version: Option<String>,

    /// `package` section (Tauri v1)
    #[serde(default)]
    pub package: Option<PackageConfig>,

    /// Bundle identifier
    #[serde(default)]
    pub identifier: Option<String>,
}

/// `package` section of a Tauri v1 configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PackageConfig {
    /// Package version. May be a path to a `.json` file.
    #[serde(default)]
    pub version: Option<String>,
}

/// A parsed configuration and the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Config file path
    pub path: PathBuf,
    /// Parsed contents
    pub config: TauriConfig,
}

#[derive(Deserialize)]
struct VersionFile {
    version: String,
}

/// Reads `src-tauri/tauri.conf.json`, or `src-tauri/Tauri.toml` when the JSON
/// file does not exist.
pub async fn load_tauri_config(layout: &ProjectLayout) -> Result<LoadedConfig> {
    let json_path = layout.json_config_path();
    if let Some(content) = read_optional(&json_path).await? {
        let config = serde_json::from_str(&content)
            .context(format!("parsing {}", json_path.display()))?;
        return Ok(LoadedConfig {
            path: json_path,
            config,
        });
    }

    let toml_path = layout.toml_config_path();
    if let Some(content) = read_optional(&toml_path).await? {
        let config = toml::from_str(&content)
            .context(format!("parsing {}", toml_path.display()))?;
        return Ok(LoadedConfig {
            path: toml_path,
            config,
        });
    }

    Err(Error::ConfigNotFound {
        tauri_dir: layout.tauri_dir(),
    })
}

/// Resolves the release version of the project.
///
/// The top-level `version` wins over `package.version`. A value ending in
/// `.json` names a file, relative to the config file, whose `version` field is
/// used instead.
pub async fn resolve_version(layout: &ProjectLayout) -> Result<String> {
    let loaded = load_tauri_config(layout).await?;
    let config_dir = loaded.path.parent().unwrap_or_else(|| Path::new("."));

    if let Some(identifier) = &loaded.config.identifier {
        log::debug!("Project identifier: {}", identifier);
    }

    let candidates = [
        loaded.config.version.as_deref(),
        loaded
            .config
            .package
            .as_ref()
            .and_then(|p| p.version.as_deref()),
    ];

    for candidate in candidates.into_iter().flatten() {
        if candidate.is_empty() {
            continue;
        }
        let version = resolve_field(candidate, config_dir).await?;
        if semver::Version::parse(&version).is_err() {
            log::warn!(
                "Version \"{}\" is not valid semver; updater clients may not compare it correctly",
                version
            );
        }
        return Ok(version);
    }

    Err(Error::MissingVersion {
        config: loaded.path,
    })
}

async fn resolve_field(value: &str, config_dir: &Path) -> Result<String> {
    if !value.ends_with(".json") {
        return Ok(value.to_string());
    }

    let path = config_dir.join(value);
    log::debug!("Reading version from {}", path.display());
    let content = tokio::fs::read_to_string(&path)
        .await
        .fs_context("reading version file", &path)?;
    let file: VersionFile =
        serde_json::from_str(&content).context(format!("parsing {}", path.display()))?;
    Ok(file.version)
}

async fn read_optional(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).fs_context("reading Tauri configuration", path),
    }
}
