//! Discovered updater artifacts.

use super::{Arch, BundleType, Os};
use std::path::PathBuf;

/// One installer file paired with its detached signature.
///
/// Artifacts are only built by the scanner after the signature file has been
/// seen on disk and the architecture has been resolved, so a value of this type
/// always refers to a signed installer with a canonical [`Arch`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artifact {
    /// Target operating system
    pub os: Os,
    /// Canonical architecture
    pub arch: Arch,
    /// Packaging format
    pub bundle: BundleType,
    /// Absolute path of the installer file
    pub bundle_path: PathBuf,
    /// Absolute path of `<bundle_path>.sig`
    pub signature_path: PathBuf,
    /// File name of the installer, used to build the download URL
    pub file_name: String,
}

impl Artifact {
    /// Short `os-arch (bundle)` label for progress output.
    pub fn label(&self) -> String {
        format!("{}-{} ({})", self.os, self.arch, self.bundle)
    }
}
