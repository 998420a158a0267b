//! CPU architecture types and utilities.

use std::fmt;

/// Canonical CPU architecture of an updater artifact.
///
/// Packaging toolchains spell architectures many ways (`amd64`, `x64`,
/// `armhfp`, ...). Every artifact is normalized to one of these variants
/// before it reaches the manifest, and the variant's [`as_str`](Arch::as_str)
/// form is what appears in platform keys.
///
/// # Examples
///
/// ```
/// use tauri_updater_json::updater::Arch;
///
/// assert_eq!(Arch::normalize("amd64"), Some(Arch::X86_64));
/// assert_eq!(Arch::normalize("sparc"), None);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X86_64,
    /// AArch64 / ARM64 (64-bit) - Apple Silicon, modern ARM devices
    AArch64,
    /// x86 / i686 (32-bit)
    I686,
    /// ARMv7 with hard-float (32-bit)
    Armv7,
    /// macOS universal binary - Contains both x86_64 and AArch64
    Universal,
}

impl Arch {
    /// Maps a vendor spelling to its canonical architecture.
    ///
    /// Matching is exact and case-sensitive. Unknown spellings return `None`
    /// rather than a guess.
    pub fn normalize(raw: &str) -> Option<Self> {
        match raw {
            "amd64" | "x86_64" | "x64" => Some(Self::X86_64),
            "arm64" | "aarch64" => Some(Self::AArch64),
            "i386" | "i686" | "x86" | "x32" => Some(Self::I686),
            "arm" | "armhf" | "armhfp" | "armv7" => Some(Self::Armv7),
            "universal" => Some(Self::Universal),
            _ => None,
        }
    }

    /// Architecture of the machine running this process, if it is in the
    /// canonical set.
    pub fn host() -> Option<Self> {
        Self::normalize(std::env::consts::ARCH)
    }

    /// Spelling used in manifest platform keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::AArch64 => "aarch64",
            Self::I686 => "i686",
            Self::Armv7 => "armv7",
            Self::Universal => "universal",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
