use std::path::{Path, PathBuf};

use super::{parse_document, ReferenceError, ReferenceFetcher};
use crate::config::{CATALOG_DOCUMENT, INTERACTIONS_DOCUMENT};
use crate::models::{CatalogEntry, InteractionRule};

/// Reads the reference documents from a local directory holding
/// `interactions.json` and `medications.json`.
pub struct FileReferenceFetcher {
    dir: PathBuf,
}

impl FileReferenceFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

async fn read_document(path: &Path) -> Result<String, ReferenceError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReferenceError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

impl ReferenceFetcher for FileReferenceFetcher {
    async fn fetch_interactions(&self) -> Result<Vec<InteractionRule>, ReferenceError> {
        let json = read_document(&self.dir.join(INTERACTIONS_DOCUMENT)).await?;
        parse_document(&json, INTERACTIONS_DOCUMENT)
    }

    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, ReferenceError> {
        let json = read_document(&self.dir.join(CATALOG_DOCUMENT)).await?;
        parse_document(&json, CATALOG_DOCUMENT)
    }
}

/// Read an interaction document from any path (blocking).
pub fn load_interactions_file(path: &Path) -> Result<Vec<InteractionRule>, ReferenceError> {
    let json = std::fs::read_to_string(path).map_err(|e| ReferenceError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_document(&json, INTERACTIONS_DOCUMENT)
}
