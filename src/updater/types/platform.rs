//! Operating system and bundle format identifiers.

use std::fmt;

/// Operating system an installer targets, spelled as the updater client expects.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Os {
    /// Linux (AppImage, deb, rpm)
    Linux,
    /// macOS (`.app.tar.gz`)
    Darwin,
    /// Windows (NSIS, MSI)
    Windows,
}

impl Os {
    /// Spelling used in manifest platform keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Installer packaging format.
///
/// The set is closed: one variant per entry of the
/// [bundle catalog](crate::updater::catalog::BUNDLE_CATALOG).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BundleType {
    /// Portable Linux AppImage
    AppImage,
    /// Debian package
    Deb,
    /// RPM package
    Rpm,
    /// Compressed macOS `.app` bundle
    App,
    /// NSIS `-setup.exe` installer
    Nsis,
    /// Windows Installer package
    Msi,
}

impl BundleType {
    /// Spelling used as the suffix of extended platform keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppImage => "appimage",
            Self::Deb => "deb",
            Self::Rpm => "rpm",
            Self::App => "app",
            Self::Nsis => "nsis",
            Self::Msi => "msi",
        }
    }
}

impl fmt::Display for BundleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
