use std::path::Path;

use thiserror::Error;
use tokio::fs;
use tracing::{info, warn};

use super::{Doha, Library, LibraryError, discovery};

#[derive(Error, Debug)]
enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Loads every discovered poem file, one await at a time in discovery
/// order. A file that fails to read or parse is logged and skipped; the
/// load as a whole only fails when discovery fails or nothing at all
/// could be loaded.
pub async fn load(dir: &Path) -> Result<Library, LibraryError> {
    let files = discovery::discover(dir).await?;

    let mut dohas = Vec::new();
    for path in &files {
        match load_one(path).await {
            Ok(doha) => dohas.push(doha),
            Err(err) => warn!("skipping {}: {err}", path.display()),
        }
    }

    if dohas.is_empty() {
        return Err(LibraryError::NothingLoaded);
    }
    info!("loaded {} of {} doha files from {}", dohas.len(), files.len(), dir.display());
    Ok(Library::new(dohas))
}

async fn load_one(path: &Path) -> Result<Doha, LoadError> {
    let raw = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}
