//! `latest.json` generation.
//!
//! The generator starts from the manifest already in the output directory (if
//! any), merges one [`PlatformEntry`] per artifact under each of its platform
//! keys following the [collision policy](merge), and stamps version, date and
//! notes. Persisting the result is a separate step ([`write_manifest`]), so a
//! failed merge never leaves a partial file behind.

mod download;
mod merge;
mod store;

pub use download::{VERSION_PLACEHOLDERS, apply_version_placeholder, build_url};
pub use merge::{MergeOutcome, merge_artifact};
pub use store::{MANIFEST_FILE, load_manifest, manifest_path, write_manifest};

use crate::updater::error::{ErrorExt, Result};
use crate::updater::types::{Artifact, Manifest, PlatformEntry};
use chrono::{SecondsFormat, Utc};
use std::path::Path;

/// Inputs of one manifest generation besides the artifacts.
#[derive(Clone, Debug)]
pub struct GenerateOptions<'a> {
    /// Release version
    pub version: &'a str,
    /// Download base URL, may contain version placeholders
    pub base_url: &'a str,
    /// Directory holding (and receiving) `latest.json`
    pub output_dir: &'a Path,
    /// Release notes; falls back to the existing manifest's notes
    pub notes: Option<&'a str>,
    /// Overwrite occupied keys unconditionally
    pub allow_overwrite: bool,
}

/// Builds the updated manifest in memory.
///
/// Artifacts are merged in the given order. Signature files are read and
/// trimmed; a collision outside the sanctioned cases aborts with
/// [`Error::PlatformCollision`](crate::updater::Error::PlatformCollision).
pub async fn generate_manifest(
    artifacts: &[Artifact],
    options: &GenerateOptions<'_>,
) -> Result<Manifest> {
    let existing = load_manifest(options.output_dir).await?;
    let (mut platforms, existing_notes) = match existing {
        Some(manifest) => {
            log::debug!(
                "Merging into existing manifest with {} platform(s)",
                manifest.platforms.len()
            );
            (manifest.platforms, manifest.notes)
        }
        None => Default::default(),
    };

    for artifact in artifacts {
        let signature = tokio::fs::read_to_string(&artifact.signature_path)
            .await
            .fs_context("reading signature file", &artifact.signature_path)?;
        let entry = PlatformEntry {
            url: build_url(options.base_url, options.version, &artifact.file_name),
            signature: signature.trim().to_string(),
        };

        let outcomes = merge_artifact(&mut platforms, artifact, &entry, options.allow_overwrite)?;
        for (key, outcome) in outcomes {
            log::debug!("{key}: {outcome} ({})", artifact.file_name);
        }
    }

    let notes = options
        .notes
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .or(existing_notes.filter(|n| !n.is_empty()));

    Ok(Manifest {
        version: options.version.to_string(),
        pub_date: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        notes,
        platforms,
    })
}
