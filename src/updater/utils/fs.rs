//! File system utilities for publishing artifacts.

use crate::bail;
use crate::updater::error::{ErrorExt, Result};
use crate::updater::types::Artifact;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        bail!("{} does not exist", from.display());
    }
    if !from.is_file() {
        bail!("{} is not a file", from.display());
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating destination directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying artifact", from)?;
    Ok(())
}

/// Copies an artifact's installer, unmodified, into `output_dir`.
///
/// Returns the destination path.
pub async fn copy_artifact_to_output(artifact: &Artifact, output_dir: &Path) -> Result<PathBuf> {
    let dest = output_dir.join(&artifact.file_name);
    copy_file(&artifact.bundle_path, &dest).await?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::updater::types::{Arch, BundleType, Os};
    use tempfile::TempDir;

    #[tokio::test]
    async fn copies_into_missing_output_dir() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("MyApp_0.1.0_x64_en-US.msi");
        std::fs::write(&src, b"msi bytes").unwrap();
        let artifact = Artifact {
            os: Os::Windows,
            arch: Arch::X86_64,
            bundle: BundleType::Msi,
            signature_path: temp.path().join("MyApp_0.1.0_x64_en-US.msi.sig"),
            bundle_path: src,
            file_name: "MyApp_0.1.0_x64_en-US.msi".into(),
        };

        let out = temp.path().join("dist").join("1.0");
        let dest = copy_artifact_to_output(&artifact, &out).await.unwrap();

        assert_eq!(dest, out.join("MyApp_0.1.0_x64_en-US.msi"));
        assert_eq!(std::fs::read(dest).unwrap(), b"msi bytes");
    }

    #[tokio::test]
    async fn refuses_directories_and_missing_sources() {
        let temp = TempDir::new().unwrap();
        let err = copy_file(&temp.path().join("missing"), &temp.path().join("x"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));

        let err = copy_file(temp.path(), &temp.path().join("x")).await.unwrap_err();
        assert!(err.to_string().contains("is not a file"));
    }
}
