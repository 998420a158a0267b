//! Download URL construction.

/// Placeholders in `--base-url` that are replaced with the release version.
pub const VERSION_PLACEHOLDERS: [&str; 3] = ["{version}", "${version}", "{{version}}"];

/// Substitutes every version placeholder in `base_url`.
pub fn apply_version_placeholder(base_url: &str, version: &str) -> String {
    // `{{version}}` and `${version}` contain `{version}`, so they go first.
    let mut resolved = base_url.to_string();
    for placeholder in VERSION_PLACEHOLDERS.iter().rev() {
        resolved = resolved.replace(placeholder, version);
    }
    resolved
}

/// Builds the download URL of `file_name` under `base_url`.
pub fn build_url(base_url: &str, version: &str, file_name: &str) -> String {
    let base = apply_version_placeholder(base_url, version);
    if base.ends_with('/') {
        format!("{base}{file_name}")
    } else {
        format!("{base}/{file_name}")
    }
}
