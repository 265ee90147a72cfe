use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use super::{parse_document, ReferenceError, ReferenceFetcher};
use crate::config::{self, ReferenceSources, CATALOG_DOCUMENT, INTERACTIONS_DOCUMENT};
use crate::models::{CatalogEntry, InteractionRule};

/// Fetches the reference documents from the static host over HTTPS.
///
/// One GET per document; no timeout, retry or caching.
pub struct HttpReferenceFetcher {
    client: reqwest::Client,
    sources: ReferenceSources,
}

impl HttpReferenceFetcher {
    pub fn new(sources: ReferenceSources) -> Result<Self, ReferenceError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("{}/{}", config::APP_NAME, config::APP_VERSION))
            .build()
            .map_err(|e| ReferenceError::HttpClient(e.to_string()))?;

        Ok(Self { client, sources })
    }

    /// Fetcher for the default host.
    pub fn default_remote() -> Result<Self, ReferenceError> {
        Self::new(ReferenceSources::default())
    }

    pub fn sources(&self) -> &ReferenceSources {
        &self.sources
    }

    async fn fetch_document<T: DeserializeOwned>(
        &self,
        url: &str,
        document: &str,
    ) -> Result<Vec<T>, ReferenceError> {
        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ReferenceError::Connection(url.to_string())
                } else {
                    ReferenceError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReferenceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReferenceError::HttpClient(e.to_string()))?;

        let parsed = parse_document(&body, document)?;
        tracing::debug!(url, document, "reference document fetched");
        Ok(parsed)
    }
}

impl ReferenceFetcher for HttpReferenceFetcher {
    async fn fetch_interactions(&self) -> Result<Vec<InteractionRule>, ReferenceError> {
        self.fetch_document(&self.sources.interactions_url, INTERACTIONS_DOCUMENT)
            .await
    }

    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, ReferenceError> {
        self.fetch_document(&self.sources.catalog_url, CATALOG_DOCUMENT)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::fetch_reference_tables;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    const INTERACTIONS: &str =
        r#"[{"drug1":"Aspirin","drug2":"Warfarin","interaction":"Increased bleeding risk"}]"#;
    const CATALOG: &str = r#"[{"RXCUI":"1","DISPLAY_NAME":"Aspirin","STRENGTH":"81 mg"}]"#;

    /// Serves `app` on an ephemeral local port; returns its base URL.
    async fn serve(app: Router) -> (String, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), server)
    }

    #[tokio::test]
    async fn fetches_both_documents() {
        let app = Router::new()
            .route("/interactions.json", get(|| async { INTERACTIONS }))
            .route("/medications.json", get(|| async { CATALOG }));
        let (base, server) = serve(app).await;

        let fetcher = HttpReferenceFetcher::new(ReferenceSources::from_base_url(&base)).unwrap();
        let tables = fetch_reference_tables(&fetcher).await.unwrap();

        assert_eq!(tables.interactions.len(), 1);
        assert_eq!(tables.interactions[0].interaction, "Increased bleeding risk");
        assert_eq!(tables.catalog.len(), 1);
        assert_eq!(tables.catalog[0].strength(), Some("81 mg"));
        server.abort();
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let app = Router::new()
            .route(
                "/interactions.json",
                get(|| async { (StatusCode::NOT_FOUND, "missing") }),
            )
            .route("/medications.json", get(|| async { CATALOG }));
        let (base, server) = serve(app).await;

        let fetcher = HttpReferenceFetcher::new(ReferenceSources::from_base_url(&base)).unwrap();
        let err = fetch_reference_tables(&fetcher).await.unwrap_err();
        match err {
            ReferenceError::Status { status, url } => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/interactions.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
        server.abort();
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let app = Router::new()
            .route("/interactions.json", get(|| async { INTERACTIONS }))
            .route("/medications.json", get(|| async { "<html>oops</html>" }));
        let (base, server) = serve(app).await;

        let fetcher = HttpReferenceFetcher::new(ReferenceSources::from_base_url(&base)).unwrap();
        let err = fetch_reference_tables(&fetcher).await.unwrap_err();
        assert!(matches!(err, ReferenceError::Parse { ref document, .. } if document == "medications.json"));
        server.abort();
    }

    #[tokio::test]
    async fn unreachable_host_fails() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher =
            HttpReferenceFetcher::new(ReferenceSources::from_base_url(&format!("http://{addr}")))
                .unwrap();
        assert!(fetch_reference_tables(&fetcher).await.is_err());
    }

    #[test]
    fn default_remote_uses_reference_host() {
        let fetcher = HttpReferenceFetcher::default_remote().unwrap();
        assert!(fetcher.sources().catalog_url.starts_with(config::REFERENCE_HOST));
    }
}
