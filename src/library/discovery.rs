use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::fs;
use tracing::debug;

use super::LibraryError;

pub const MANIFEST_FILE: &str = "manifest.json";

/// Manifest shipped alongside the poem files, listing them explicitly.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    doha_files: Vec<String>,
}

/// Resolves the ordered list of poem files under `dir`.
///
/// A `manifest.json` in the directory wins and its order is kept; a
/// manifest that is present but unreadable or malformed aborts discovery.
/// Without one, the directory is scanned for `doha_*.json` files in
/// sorted name order.
pub async fn discover(dir: &Path) -> Result<Vec<PathBuf>, LibraryError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if fs::try_exists(&manifest_path).await.unwrap_or(false) {
        debug!("discovering dohas via {}", manifest_path.display());
        from_manifest(dir, &manifest_path).await
    } else {
        debug!("no manifest, scanning {}", dir.display());
        scan_dir(dir).await
    }
}

async fn from_manifest(dir: &Path, path: &Path) -> Result<Vec<PathBuf>, LibraryError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|err| LibraryError::Manifest(format!("{}: {err}", path.display())))?;
    let manifest: Manifest = serde_json::from_str(&raw)
        .map_err(|err| LibraryError::Manifest(format!("{}: {err}", path.display())))?;
    Ok(manifest
        .doha_files
        .iter()
        .map(|name| dir.join(name))
        .collect())
}

async fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>, LibraryError> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|err| LibraryError::Discovery(format!("{}: {err}", dir.display())))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|err| LibraryError::Discovery(format!("{}: {err}", dir.display())))?
    {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.starts_with("doha_") && name.ends_with(".json") {
            names.push(name.to_owned());
        }
    }
    names.sort_unstable();
    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}
