//! Platform key collision policy.
//!
//! Without `--allow-overwrite-platforms`, an occupied key is only replaced or
//! kept in a few sanctioned cases:
//!
//! - the new entry is identical to the existing one (re-running over the same
//!   artifacts is a no-op);
//! - a universal macOS archive never displaces an existing darwin entry;
//! - for the bundle-less `windows-<arch>` key, MSI wins over NSIS.
//!
//! Any other collision means two artifacts claim the same platform and is an
//! error, so a previously published entry is never lost silently.

use crate::updater::error::{Error, Result};
use crate::updater::keys::{is_universal_darwin_key, is_windows_basic_key, platform_keys};
use crate::updater::types::{Arch, Artifact, BundleType, Os, PlatformEntry};
use std::collections::BTreeMap;
use std::fmt;

/// What happened to one platform key during a merge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MergeOutcome {
    /// Key was absent and now holds the new entry
    Inserted,
    /// Key held a different entry that was replaced
    Overwritten,
    /// Key already held an identical entry
    Unchanged,
    /// Existing entry kept for a universal macOS key
    KeptUniversal,
    /// Existing entry kept because NSIS never displaces the Windows basic key
    KeptForMsi,
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Inserted => "inserted",
            Self::Overwritten => "overwritten",
            Self::Unchanged => "unchanged",
            Self::KeptUniversal => "kept existing (universal build)",
            Self::KeptForMsi => "kept existing (MSI preferred)",
        };
        f.write_str(text)
    }
}

/// Merges `entry` under every key of `artifact`.
///
/// Returns the outcome per key, in key order. On a disallowed collision the
/// error names the key and file; keys processed before it keep their updates,
/// so callers must discard `platforms` on error.
pub fn merge_artifact(
    platforms: &mut BTreeMap<String, PlatformEntry>,
    artifact: &Artifact,
    entry: &PlatformEntry,
    allow_overwrite: bool,
) -> Result<Vec<(String, MergeOutcome)>> {
    let keys = platform_keys(artifact);
    let mut outcomes = Vec::with_capacity(keys.len());

    for key in keys {
        let outcome = resolve_key(platforms.get(&key), artifact, &key, entry, allow_overwrite)?;
        if matches!(outcome, MergeOutcome::Inserted | MergeOutcome::Overwritten) {
            platforms.insert(key.clone(), entry.clone());
        }
        outcomes.push((key, outcome));
    }

    Ok(outcomes)
}

fn resolve_key(
    existing: Option<&PlatformEntry>,
    artifact: &Artifact,
    key: &str,
    entry: &PlatformEntry,
    allow_overwrite: bool,
) -> Result<MergeOutcome> {
    let Some(existing) = existing else {
        return Ok(MergeOutcome::Inserted);
    };

    if existing == entry {
        return Ok(MergeOutcome::Unchanged);
    }
    if allow_overwrite {
        return Ok(MergeOutcome::Overwritten);
    }

    let universal_darwin = artifact.os == Os::Darwin && artifact.arch == Arch::Universal;
    if universal_darwin && is_universal_darwin_key(key) {
        return Ok(MergeOutcome::KeptUniversal);
    }

    if is_windows_basic_key(artifact, key) {
        return Ok(match artifact.bundle {
            BundleType::Msi => MergeOutcome::Overwritten,
            _ => MergeOutcome::KeptForMsi,
        });
    }

    Err(Error::PlatformCollision {
        key: key.to_string(),
        file_name: artifact.file_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn artifact(os: Os, arch: Arch, bundle: BundleType, file_name: &str) -> Artifact {
        Artifact {
            os,
            arch,
            bundle,
            bundle_path: PathBuf::from("/b").join(file_name),
            signature_path: PathBuf::from("/b").join(format!("{file_name}.sig")),
            file_name: file_name.to_string(),
        }
    }

    fn entry(name: &str) -> PlatformEntry {
        PlatformEntry {
            url: format!("https://cdn.example.com/{name}"),
            signature: format!("sig-{name}"),
        }
    }

    #[test]
    fn fresh_keys_are_inserted() {
        let mut platforms = BTreeMap::new();
        let app = artifact(Os::Linux, Arch::X86_64, BundleType::AppImage, "a.AppImage");
        let outcomes = merge_artifact(&mut platforms, &app, &entry("a"), false).unwrap();

        assert_eq!(
            outcomes,
            vec![
                ("linux-x86_64".to_string(), MergeOutcome::Inserted),
                ("linux-x86_64-appimage".to_string(), MergeOutcome::Inserted),
            ]
        );
        assert_eq!(platforms["linux-x86_64"], entry("a"));
    }

    #[test]
    fn msi_wins_basic_windows_key_in_either_order() {
        let nsis = artifact(Os::Windows, Arch::X86_64, BundleType::Nsis, "A_1.0.0_x64-setup.exe");
        let msi = artifact(Os::Windows, Arch::X86_64, BundleType::Msi, "A_1.0.0_x64_en-US.msi");

        for order in [[&nsis, &msi], [&msi, &nsis]] {
            let mut platforms = BTreeMap::new();
            for a in order {
                let e = entry(&a.file_name);
                merge_artifact(&mut platforms, a, &e, false).unwrap();
            }
            assert_eq!(platforms["windows-x86_64"], entry(&msi.file_name));
            assert_eq!(platforms["windows-x86_64-msi"], entry(&msi.file_name));
            assert_eq!(platforms["windows-x86_64-nsis"], entry(&nsis.file_name));
        }
    }

    #[test]
    fn universal_darwin_keeps_existing_entries() {
        let mut platforms = BTreeMap::new();
        let arm = artifact(Os::Darwin, Arch::AArch64, BundleType::App, "arm.app.tar.gz");
        merge_artifact(&mut platforms, &arm, &entry("arm"), false).unwrap();

        let universal = artifact(Os::Darwin, Arch::Universal, BundleType::App, "u.app.tar.gz");
        let outcomes = merge_artifact(&mut platforms, &universal, &entry("u"), false).unwrap();

        assert_eq!(platforms["darwin-aarch64"], entry("arm"));
        assert_eq!(platforms["darwin-aarch64-app"], entry("arm"));
        assert_eq!(platforms["darwin-x86_64"], entry("u"));
        assert_eq!(platforms["darwin-x86_64-app"], entry("u"));
        assert_eq!(
            outcomes
                .iter()
                .filter(|(_, o)| *o == MergeOutcome::KeptUniversal)
                .count(),
            2
        );
    }

    #[test]
    fn unexpected_collision_is_an_error() {
        let mut platforms = BTreeMap::new();
        let appimage = artifact(Os::Linux, Arch::X86_64, BundleType::AppImage, "a.AppImage");
        let deb = artifact(Os::Linux, Arch::X86_64, BundleType::Deb, "a_amd64.deb");
        merge_artifact(&mut platforms, &appimage, &entry("appimage"), false).unwrap();

        let err = merge_artifact(&mut platforms, &deb, &entry("deb"), false).unwrap_err();
        match err {
            Error::PlatformCollision { key, file_name } => {
                assert_eq!(key, "linux-x86_64");
                assert_eq!(file_name, "a_amd64.deb");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn allow_overwrite_replaces_silently() {
        let mut platforms = BTreeMap::new();
        let appimage = artifact(Os::Linux, Arch::X86_64, BundleType::AppImage, "a.AppImage");
        let deb = artifact(Os::Linux, Arch::X86_64, BundleType::Deb, "a_amd64.deb");
        merge_artifact(&mut platforms, &appimage, &entry("appimage"), true).unwrap();
        merge_artifact(&mut platforms, &deb, &entry("deb"), true).unwrap();

        assert_eq!(platforms["linux-x86_64"], entry("deb"));
        assert_eq!(platforms["linux-x86_64-appimage"], entry("appimage"));
    }

    #[test]
    fn identical_entry_is_not_a_collision() {
        let mut platforms = BTreeMap::new();
        let rpm = artifact(Os::Linux, Arch::X86_64, BundleType::Rpm, "a-1.0-1.x86_64.rpm");
        merge_artifact(&mut platforms, &rpm, &entry("rpm"), false).unwrap();
        let before = platforms.clone();

        let outcomes = merge_artifact(&mut platforms, &rpm, &entry("rpm"), false).unwrap();
        assert!(outcomes.iter().all(|(_, o)| *o == MergeOutcome::Unchanged));
        assert_eq!(platforms, before);
    }
}
