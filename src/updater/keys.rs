//! Platform key derivation.
//!
//! The updater client looks up `os-arch` first and `os-arch-bundle` when it
//! knows which installer it came from. Every artifact therefore registers
//! under both forms; universal macOS archives register under both concrete
//! architectures.

use super::types::{Arch, Artifact, BundleType, Os};

/// Keys claimed by a universal macOS archive.
pub const UNIVERSAL_DARWIN_KEYS: [&str; 4] = [
    "darwin-x86_64",
    "darwin-aarch64",
    "darwin-x86_64-app",
    "darwin-aarch64-app",
];

/// Returns the manifest keys an artifact is published under. Never empty.
pub fn platform_keys(artifact: &Artifact) -> Vec<String> {
    if artifact.os == Os::Darwin && artifact.arch == Arch::Universal {
        return UNIVERSAL_DARWIN_KEYS.iter().map(|k| k.to_string()).collect();
    }
    vec![
        basic_key(artifact.os, artifact.arch),
        format!("{}-{}-{}", artifact.os, artifact.arch, artifact.bundle),
    ]
}

/// The `os-arch` form of a key.
pub fn basic_key(os: Os, arch: Arch) -> String {
    format!("{os}-{arch}")
}

/// True for the four keys a universal macOS archive fans out to.
pub fn is_universal_darwin_key(key: &str) -> bool {
    UNIVERSAL_DARWIN_KEYS.contains(&key)
}

/// True if `key` is the bundle-less key of a Windows installer, the one NSIS
/// and MSI builds of the same architecture compete for.
pub fn is_windows_basic_key(artifact: &Artifact, key: &str) -> bool {
    artifact.os == Os::Windows
        && matches!(artifact.bundle, BundleType::Nsis | BundleType::Msi)
        && key == basic_key(artifact.os, artifact.arch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn artifact(os: Os, arch: Arch, bundle: BundleType) -> Artifact {
        Artifact {
            os,
            arch,
            bundle,
            bundle_path: PathBuf::from("/out/file"),
            signature_path: PathBuf::from("/out/file.sig"),
            file_name: "file".into(),
        }
    }

    fn key_set(keys: Vec<String>) -> HashSet<String> {
        keys.into_iter().collect()
    }

    #[test]
    fn universal_darwin_fans_out_to_four_keys() {
        let keys = platform_keys(&artifact(Os::Darwin, Arch::Universal, BundleType::App));
        assert_eq!(keys.len(), 4);
        assert_eq!(
            key_set(keys),
            key_set(UNIVERSAL_DARWIN_KEYS.iter().map(|k| k.to_string()).collect())
        );
    }

    #[test]
    fn other_artifacts_get_basic_and_extended_key() {
        let keys = platform_keys(&artifact(Os::Linux, Arch::X86_64, BundleType::AppImage));
        assert_eq!(keys, vec!["linux-x86_64", "linux-x86_64-appimage"]);

        let keys = platform_keys(&artifact(Os::Darwin, Arch::AArch64, BundleType::App));
        assert_eq!(keys, vec!["darwin-aarch64", "darwin-aarch64-app"]);

        let keys = platform_keys(&artifact(Os::Windows, Arch::I686, BundleType::Msi));
        assert_eq!(keys, vec!["windows-i686", "windows-i686-msi"]);
    }

    #[test]
    fn windows_basic_key_detection() {
        let msi = artifact(Os::Windows, Arch::X86_64, BundleType::Msi);
        assert!(is_windows_basic_key(&msi, "windows-x86_64"));
        assert!(!is_windows_basic_key(&msi, "windows-x86_64-msi"));

        let deb = artifact(Os::Linux, Arch::X86_64, BundleType::Deb);
        assert!(!is_windows_basic_key(&deb, "linux-x86_64"));
    }

    #[test]
    fn universal_key_membership() {
        assert!(is_universal_darwin_key("darwin-aarch64-app"));
        assert!(!is_universal_darwin_key("darwin-universal"));
        assert!(!is_universal_darwin_key("linux-x86_64"));
    }
}
