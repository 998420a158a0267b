//! The `latest.json` document consumed by the Tauri updater.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Download location and signature for one platform key.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlatformEntry {
    /// Absolute download URL of the installer
    pub url: String,
    /// Trimmed content of the installer's `.sig` file
    pub signature: String,
}

/// Updater manifest.
///
/// `platforms` is keyed by `os-arch` or `os-arch-bundle` strings and kept in a
/// sorted map so that serialization is deterministic apart from `pub_date`.
///
/// ```json
/// {
///   "version": "1.2.0",
///   "pub_date": "2024-05-01T12:00:00.000Z",
///   "notes": "Bug fixes",
///   "platforms": {
///     "linux-x86_64": { "url": "https://...", "signature": "..." }
///   }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Release version
    pub version: String,

    /// Publication timestamp (RFC 3339, UTC). Optional when loading older files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,

    /// Release notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Entries per platform key
    pub platforms: BTreeMap<String, PlatformEntry>,
}
