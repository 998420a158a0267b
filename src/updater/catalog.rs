//! Catalog of updater bundle formats.
//!
//! Each packaging toolchain Tauri drives has its own stable file naming
//! convention. The catalog records, per format, where the files land under
//! `bundle/`, which names count as installers, and how to read the
//! architecture back out of the name (or path).
//!
//! | Format   | Subdir     | Example file name                    |
//! |----------|------------|--------------------------------------|
//! | AppImage | `appimage` | `MyApp_0.1.0_amd64.AppImage`         |
//! | deb      | `deb`      | `MyApp_0.1.0_amd64.deb`              |
//! | rpm      | `rpm`      | `myapp-0.1.0-1.x86_64.rpm`           |
//! | app      | `macos`    | `MyApp.app.tar.gz`                   |
//! | NSIS     | `nsis`     | `MyApp_0.1.0_x64-setup.exe`          |
//! | MSI      | `msi`      | `MyApp_0.1.0_x64_en-US.msi`          |

use super::types::{Arch, BundleType, Os};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// How the architecture is recovered from a matched file.
#[derive(Debug)]
pub enum ArchRule {
    /// The first capture group of the regex, applied to the file name, is a
    /// vendor architecture spelling.
    FileNameToken(Regex),
    /// macOS app archives: target-triple marker in the path, then markers in
    /// the file name, then the `_<arch>` token, then the host architecture.
    MacOsApp,
}

/// Static description of one supported bundle format.
#[derive(Debug)]
pub struct BundleDescriptor {
    /// Operating system the format installs on
    pub os: Os,
    /// Packaging format
    pub bundle: BundleType,
    /// Directory under `bundle/` the toolchain writes to
    pub search_subdir: &'static str,
    /// Matches installer file names (never the `.sig` companions)
    pub file_pattern: Regex,
    /// Architecture extraction rule
    pub arch_rule: ArchRule,
}

impl BundleDescriptor {
    /// Returns true if `file_name` is an installer of this format.
    pub fn matches(&self, file_name: &str) -> bool {
        self.file_pattern.is_match(file_name)
    }

    /// Extracts the canonical architecture of a matched installer.
    ///
    /// `file_path` is only consulted by the macOS rule, which looks for
    /// `*-apple-darwin` target directories in it.
    pub fn extract_arch(&self, file_name: &str, file_path: &Path) -> Option<Arch> {
        match &self.arch_rule {
            ArchRule::FileNameToken(re) => capture_arch(re, file_name),
            ArchRule::MacOsApp => macos_app_arch(file_name, file_path),
        }
    }
}

/// The six supported formats, in scan order.
pub static BUNDLE_CATALOG: LazyLock<Vec<BundleDescriptor>> = LazyLock::new(|| {
    vec![
        BundleDescriptor {
            os: Os::Linux,
            bundle: BundleType::AppImage,
            search_subdir: "appimage",
            file_pattern: compile(r"\.AppImage$"),
            arch_rule: ArchRule::FileNameToken(compile(r"_([^_]+)\.AppImage$")),
        },
        BundleDescriptor {
            os: Os::Linux,
            bundle: BundleType::Deb,
            search_subdir: "deb",
            file_pattern: compile(r"\.deb$"),
            arch_rule: ArchRule::FileNameToken(compile(r"_([^_]+)\.deb$")),
        },
        BundleDescriptor {
            os: Os::Linux,
            bundle: BundleType::Rpm,
            search_subdir: "rpm",
            file_pattern: compile(r"\.rpm$"),
            // name-version-release.arch.rpm
            arch_rule: ArchRule::FileNameToken(compile(r"\.([^.]+)\.rpm$")),
        },
        BundleDescriptor {
            os: Os::Darwin,
            bundle: BundleType::App,
            search_subdir: "macos",
            file_pattern: compile(r"\.app\.tar\.gz$"),
            arch_rule: ArchRule::MacOsApp,
        },
        BundleDescriptor {
            os: Os::Windows,
            bundle: BundleType::Nsis,
            search_subdir: "nsis",
            file_pattern: compile(r"-setup\.exe$"),
            // Name_version_arch-setup.exe
            arch_rule: ArchRule::FileNameToken(compile(r"_([^_]+)-setup\.exe$")),
        },
        BundleDescriptor {
            os: Os::Windows,
            bundle: BundleType::Msi,
            search_subdir: "msi",
            file_pattern: compile(r"\.msi$"),
            // Name_version_arch_lang.msi
            arch_rule: ArchRule::FileNameToken(compile(r"_([^_]+)_[^_]+\.msi$")),
        },
    ]
});

static MACOS_APP_TOKEN: LazyLock<Regex> = LazyLock::new(|| compile(r"_([^_]+)\.app\.tar\.gz$"));

const DARWIN_TRIPLES: [(&str, Arch); 3] = [
    ("universal-apple-darwin", Arch::Universal),
    ("aarch64-apple-darwin", Arch::AArch64),
    ("x86_64-apple-darwin", Arch::X86_64),
];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("catalog pattern is a valid regex")
}

fn capture_arch(re: &Regex, file_name: &str) -> Option<Arch> {
    re.captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Arch::normalize(m.as_str()))
}

fn macos_app_arch(file_name: &str, file_path: &Path) -> Option<Arch> {
    let path = file_path.to_string_lossy();
    if let Some((_, arch)) = DARWIN_TRIPLES
        .iter()
        .find(|(triple, _)| path.contains(triple))
    {
        return Some(*arch);
    }

    if file_name.contains("universal") {
        return Some(Arch::Universal);
    }
    if file_name.contains("aarch64") || file_name.contains("arm64") {
        return Some(Arch::AArch64);
    }
    if file_name.contains("x86_64") || file_name.contains("x64") {
        return Some(Arch::X86_64);
    }

    // Known imprecision: an unmarked archive is assumed to match this machine.
    capture_arch(&MACOS_APP_TOKEN, file_name).or_else(Arch::host)
}
