//! Artifact discovery across Tauri bundle output directories.
//!
//! A host build writes installers to `src-tauri/target/release/bundle/`, a
//! cross build to `src-tauri/target/<triple>/release/bundle/`. The scanner
//! walks every such root, applies the [bundle catalog](super::catalog), and
//! pairs each installer with its `.sig` file.
//!
//! Candidates without a signature or with an unrecognized architecture are not
//! errors. They are returned in [`ScanReport::skipped`] so the caller decides
//! how to report them.

use super::catalog::{BUNDLE_CATALOG, BundleDescriptor};
use super::error::{Error, ErrorExt, Result};
use super::project::{PROFILE_DIRS, ProjectLayout};
use super::types::Artifact;
use path_absolutize::Absolutize;
use std::collections::HashSet;
use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Why a matching file was not turned into an [`Artifact`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SkipReason {
    /// `<file>.sig` does not exist
    MissingSignature,
    /// The architecture could not be read from the name or path
    UnknownArch,
}

/// A matching installer that was left out of the scan result.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkippedCandidate {
    /// Absolute path of the installer
    pub path: PathBuf,
    /// Installer file name
    pub file_name: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

impl fmt::Display for SkippedCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::MissingSignature => {
                write!(f, "Signature file not found for {}, skipping", self.file_name)
            }
            SkipReason::UnknownArch => write!(
                f,
                "Could not detect architecture for {}, skipping",
                self.file_name
            ),
        }
    }
}

/// Result of a scan: discovered artifacts plus the candidates that were skipped.
#[derive(Clone, Debug, Default)]
pub struct ScanReport {
    /// Artifacts in discovery order (roots in order, catalog order per root)
    pub artifacts: Vec<Artifact>,
    /// Skipped candidates in discovery order
    pub skipped: Vec<SkippedCandidate>,
}

/// Lists the bundle roots to scan.
///
/// The default `target/release/bundle` root always comes first, even when it
/// does not exist. It is followed by `target/<dir>/release/bundle` for every
/// other directory under `target/` whose bundle directory exists, in name order.
pub async fn search_directories(layout: &ProjectLayout) -> Result<Vec<PathBuf>> {
    let mut roots = vec![layout.default_bundle_dir()];
    let target_dir = layout.target_dir();

    let mut entries = match tokio::fs::read_dir(&target_dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(roots),
        Err(e) => return Err(e).fs_context("reading target directory", &target_dir),
    };

    let mut alternates = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("reading target directory", &target_dir)?
    {
        let name = entry.file_name();
        if name.to_str().is_some_and(|n| PROFILE_DIRS.contains(&n)) {
            continue;
        }
        if !entry.path().is_dir() {
            continue;
        }
        alternates.push(name);
    }
    alternates.sort();

    for name in alternates {
        let root = ProjectLayout::bundle_dir_of(&target_dir.join(name).join("release"));
        if root.is_dir() && !roots.contains(&root) {
            roots.push(root);
        }
    }

    Ok(roots)
}

/// Finds every signed installer under the project's bundle roots.
///
/// A file reachable from more than one root is reported once, at its first
/// occurrence. Missing directories yield no artifacts rather than an error.
pub async fn find_artifacts(layout: &ProjectLayout) -> Result<ScanReport> {
    let roots = search_directories(layout).await?;
    let mut report = ScanReport::default();
    let mut seen = HashSet::new();

    for root in &roots {
        for descriptor in BUNDLE_CATALOG.iter() {
            let dir = root.join(descriptor.search_subdir);
            for path in list_matching_files(&dir, descriptor).await? {
                let path = path
                    .absolutize()
                    .fs_context("resolving artifact path", &path)?
                    .into_owned();
                if !seen.insert(path.clone()) {
                    log::debug!("Already processed {}, skipping", path.display());
                    continue;
                }
                match inspect_candidate(path, descriptor).await? {
                    Ok(artifact) => report.artifacts.push(artifact),
                    Err(skipped) => report.skipped.push(skipped),
                }
            }
        }
    }

    Ok(report)
}

/// Returns `<path>.sig`.
pub fn signature_path(path: &Path) -> PathBuf {
    let mut sig: OsString = path.as_os_str().to_owned();
    sig.push(".sig");
    PathBuf::from(sig)
}

async fn inspect_candidate(
    path: PathBuf,
    descriptor: &BundleDescriptor,
) -> Result<std::result::Result<Artifact, SkippedCandidate>> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let sig = signature_path(&path);
    if !is_file(&sig).await? {
        return Ok(Err(SkippedCandidate {
            path,
            file_name,
            reason: SkipReason::MissingSignature,
        }));
    }

    let Some(arch) = descriptor.extract_arch(&file_name, &path) else {
        return Ok(Err(SkippedCandidate {
            path,
            file_name,
            reason: SkipReason::UnknownArch,
        }));
    };

    Ok(Ok(Artifact {
        os: descriptor.os,
        arch,
        bundle: descriptor.bundle,
        bundle_path: path,
        signature_path: sig,
        file_name,
    }))
}

async fn is_file(path: &Path) -> Result<bool> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).fs_context("reading signature metadata", path),
    }
}

/// Lists files directly inside `dir` whose names match the descriptor, sorted
/// by name. A missing directory is an empty listing.
async fn list_matching_files(
    dir: &Path,
    descriptor: &'static BundleDescriptor,
) -> Result<Vec<PathBuf>> {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry
                .map_err(io::Error::from)
                .fs_context("listing bundle directory", &dir)?;
            let path = entry.path();
            let matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| descriptor.matches(n));
            if matches && path.is_file() {
                files.push(path.to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Directory scan task panicked: {}", e)))?
}
