//! Reference data: the interaction rule table and the medication catalog.
//!
//! Both documents are fetched together and applied together. A failure in
//! either leaves the caller's tables as they were.

pub mod file;
pub mod http;

pub use file::FileReferenceFetcher;
pub use http::HttpReferenceFetcher;

use std::future::Future;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::{CATALOG_DOCUMENT, INTERACTIONS_DOCUMENT};
use crate::models::{CatalogEntry, InteractionRule};

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Reference host is not reachable at {0}")]
    Connection(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Reference host returned error (status {status}) for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse {document}: {reason}")]
    Parse { document: String, reason: String },

    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },
}

/// In-memory reference tables. Empty until a load succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTables {
    pub interactions: Vec<InteractionRule>,
    pub catalog: Vec<CatalogEntry>,
}

impl ReferenceTables {
    pub fn new(interactions: Vec<InteractionRule>, catalog: Vec<CatalogEntry>) -> Self {
        Self {
            interactions,
            catalog,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty() && self.catalog.is_empty()
    }
}

/// Source of the two reference documents.
pub trait ReferenceFetcher {
    fn fetch_interactions(
        &self,
    ) -> impl Future<Output = Result<Vec<InteractionRule>, ReferenceError>> + Send;

    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<CatalogEntry>, ReferenceError>> + Send;
}

/// Fetch both documents concurrently; succeeds only if both do.
pub async fn fetch_reference_tables<F: ReferenceFetcher>(
    fetcher: &F,
) -> Result<ReferenceTables, ReferenceError> {
    let (interactions, catalog) =
        tokio::try_join!(fetcher.fetch_interactions(), fetcher.fetch_catalog())?;

    tracing::info!(
        interactions = interactions.len(),
        catalog = catalog.len(),
        "reference data loaded"
    );

    Ok(ReferenceTables::new(interactions, catalog))
}

/// Parse the interaction rule document (a JSON array).
pub fn parse_interactions(json: &str) -> Result<Vec<InteractionRule>, ReferenceError> {
    parse_document(json, INTERACTIONS_DOCUMENT)
}

/// Parse the medication catalog document (a JSON array).
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>, ReferenceError> {
    parse_document(json, CATALOG_DOCUMENT)
}

pub(crate) fn parse_document<T: DeserializeOwned>(
    json: &str,
    document: &str,
) -> Result<Vec<T>, ReferenceError> {
    serde_json::from_str(json).map_err(|e| ReferenceError::Parse {
        document: document.to_string(),
        reason: e.to_string(),
    })
}
