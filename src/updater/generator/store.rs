//! Reading and writing `latest.json`.

use crate::updater::error::{ErrorExt, Result};
use crate::updater::types::Manifest;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "latest.json";

/// `<output_dir>/latest.json`
pub fn manifest_path(output_dir: &Path) -> PathBuf {
    output_dir.join(MANIFEST_FILE)
}

/// Loads the manifest already present in `output_dir`.
///
/// Returns `None` when the file does not exist, is not valid JSON of the
/// expected shape, or carries an entry whose URL is not an absolute URL.
/// Other read failures are errors.
pub async fn load_manifest(output_dir: &Path) -> Result<Option<Manifest>> {
    let path = manifest_path(output_dir);
    let content = match tokio::fs::read(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).fs_context("reading existing manifest", &path),
    };

    let manifest: Manifest = match serde_json::from_slice(&content) {
        Ok(manifest) => manifest,
        Err(e) => {
            log::warn!("Ignoring unparseable {}: {}", path.display(), e);
            return Ok(None);
        }
    };

    if let Some((key, entry)) = manifest
        .platforms
        .iter()
        .find(|(_, entry)| url::Url::parse(&entry.url).is_err())
    {
        log::warn!(
            "Ignoring {}: platform \"{}\" has invalid url \"{}\"",
            path.display(),
            key,
            entry.url
        );
        return Ok(None);
    }

    Ok(Some(manifest))
}

/// Writes `manifest` to `<output_dir>/latest.json` as pretty-printed JSON with
/// a trailing newline, replacing any existing file.
pub async fn write_manifest(manifest: &Manifest, output_dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .fs_context("creating output directory", output_dir)?;

    let path = manifest_path(output_dir);
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    tokio::fs::write(&path, json)
        .await
        .fs_context("writing manifest", &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::updater::types::PlatformEntry;
    use tempfile::TempDir;

    fn sample() -> Manifest {
        let mut manifest = Manifest {
            version: "1.2.0".into(),
            pub_date: Some("2024-05-01T12:00:00.000Z".into()),
            notes: Some("Fixes".into()),
            ..Default::default()
        };
        manifest.platforms.insert(
            "linux-x86_64".into(),
            PlatformEntry {
                url: "https://cdn.example.com/1.2.0/a.AppImage".into(),
                signature: "c2ln".into(),
            },
        );
        manifest
    }

    #[tokio::test]
    async fn written_manifest_loads_back() {
        let dir = TempDir::new().unwrap();
        let manifest = sample();
        write_manifest(&manifest, dir.path()).await.unwrap();

        let loaded = load_manifest(dir.path()).await.unwrap().unwrap();
        assert_eq!(loaded.platforms, manifest.platforms);
        assert_eq!(loaded.notes.as_deref(), Some("Fixes"));
    }

    #[tokio::test]
    async fn output_is_pretty_with_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let mut manifest = sample();
        manifest.notes = None;
        let path = write_manifest(&manifest, dir.path()).await.unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\n  \"version\": \"1.2.0\""));
        assert!(!text.contains("notes"));
    }

    #[tokio::test]
    async fn missing_or_invalid_files_load_as_none() {
        let dir = TempDir::new().unwrap();
        assert!(load_manifest(dir.path()).await.unwrap().is_none());

        std::fs::write(manifest_path(dir.path()), "{ not json").unwrap();
        assert!(load_manifest(dir.path()).await.unwrap().is_none());

        std::fs::write(
            manifest_path(dir.path()),
            r#"{"version":"1.0.0","platforms":{"linux-x86_64":{"url":"relative/a","signature":"s"}}}"#,
        )
        .unwrap();
        assert!(load_manifest(dir.path()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn non_utf8_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        std::fs::write(manifest_path(dir.path()), b"{\"version\":\"1\xff\"}").unwrap();
        assert!(load_manifest(dir.path()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn pub_date_is_optional_when_loading() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            manifest_path(dir.path()),
            r#"{"version":"1.0.0","platforms":{}}"#,
        )
        .unwrap();
        let loaded = load_manifest(dir.path()).await.unwrap().unwrap();
        assert_eq!(loaded.pub_date, None);
        assert!(loaded.platforms.is_empty());
    }
}
