//! Command line interface for generating `latest.json`.
//!
//! The pipeline is linear: resolve the version, scan for artifacts, copy them
//! to the output directory, then generate and write the manifest. The first
//! fatal error aborts the run before `latest.json` is touched.

mod args;

pub use args::{Args, RuntimeConfig, validate_base_url};

use crate::config;
use crate::error::{CliError, Result};
use crate::updater::{
    self, Artifact, GenerateOptions, ProjectLayout, utils::fs::copy_artifact_to_output,
};
use std::collections::HashMap;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Runs the pipeline for already parsed arguments.
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;
    let runtime = RuntimeConfig::try_from(args)?;
    let layout = ProjectLayout::new(&runtime.tauri_project);

    log::info!("Reading Tauri configuration...");
    let version = config::resolve_version(&layout).await?;
    log::info!("Version: {}", version);
    validate_base_url(&runtime.base_url, &version)
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    log::info!("Searching for build artifacts...");
    let search_dirs = updater::search_directories(&layout).await?;
    log::info!("Search directories:");
    for dir in &search_dirs {
        log::info!("  - {}", dir.display());
    }

    let report = updater::find_artifacts(&layout).await?;
    for skipped in &report.skipped {
        log::warn!("{}", skipped);
    }
    if report.artifacts.is_empty() {
        return Err(CliError::NoArtifacts {
            searched: search_dirs,
        }
        .into());
    }

    log::info!("Found {} artifact(s):", report.artifacts.len());
    for artifact in &report.artifacts {
        log::info!("  - {}: {}", artifact.label(), artifact.file_name);
    }

    ensure_unique_file_names(&report.artifacts)?;

    log::info!("Copying artifacts to {}...", runtime.output_dir.display());
    for artifact in &report.artifacts {
        copy_artifact_to_output(artifact, &runtime.output_dir)
            .await
            .map_err(|e| CliError::ExecutionFailed {
                command: format!("copy {}", artifact.file_name),
                reason: e.to_string(),
            })?;
        log::info!("  Copied: {}", artifact.file_name);
    }

    log::info!("Generating latest.json...");
    let manifest = updater::generate_manifest(
        &report.artifacts,
        &GenerateOptions {
            version: &version,
            base_url: &runtime.base_url,
            output_dir: &runtime.output_dir,
            notes: runtime.notes.as_deref(),
            allow_overwrite: runtime.allow_overwrite_platforms,
        },
    )
    .await?;

    let path = updater::write_manifest(&manifest, &runtime.output_dir).await?;
    log::info!(
        "Generated {} with {} platform(s)",
        path.display(),
        manifest.platforms.len()
    );

    Ok(0)
}

/// Artifacts land side by side in the output directory and are addressed by
/// file name, so two artifacts may not share one.
fn ensure_unique_file_names(artifacts: &[Artifact]) -> Result<()> {
    let mut seen: HashMap<&str, &Artifact> = HashMap::new();
    for artifact in artifacts {
        if let Some(first) = seen.insert(&artifact.file_name, artifact) {
            return Err(CliError::ExecutionFailed {
                command: "copy artifacts".to_string(),
                reason: format!(
                    "{} and {} share the file name {}",
                    first.bundle_path.display(),
                    artifact.bundle_path.display(),
                    artifact.file_name
                ),
            }
            .into());
        }
    }
    Ok(())
}
