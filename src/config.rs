/// Application-level constants
pub const APP_NAME: &str = "MedTrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static host serving both reference documents.
pub const REFERENCE_HOST: &str = "https://pub-4157e937f3b34c29916c5f2460c3b0f9.r2.dev";

/// File name of the interaction rule document.
pub const INTERACTIONS_DOCUMENT: &str = "interactions.json";

/// File name of the medication catalog document.
pub const CATALOG_DOCUMENT: &str = "medications.json";

/// Maximum number of catalog entries returned by a search.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// A search runs only once the query is longer than this many characters.
pub const MIN_SEARCH_QUERY_CHARS: usize = 1;

/// Prescriber recorded when the add form leaves it blank.
pub const DEFAULT_PRESCRIBER: &str = "Current Provider";

/// Telemetry event emitted for every active catalog search.
pub const SEARCH_EVENT: &str = "medication_search";

/// Environment overrides, read only by [`ReferenceSources::from_env`].
pub const INTERACTIONS_URL_ENV: &str = "MEDTRACK_INTERACTIONS_URL";
pub const CATALOG_URL_ENV: &str = "MEDTRACK_CATALOG_URL";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "medtrack_lib=info,warn"
}

/// Default URL of the interaction rule document.
pub fn default_interactions_url() -> String {
    format!("{REFERENCE_HOST}/{INTERACTIONS_DOCUMENT}")
}

/// Default URL of the medication catalog document.
pub fn default_catalog_url() -> String {
    format!("{REFERENCE_HOST}/{CATALOG_DOCUMENT}")
}

/// Where the reference documents are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSources {
    pub interactions_url: String,
    pub catalog_url: String,
}

impl ReferenceSources {
    pub fn new(interactions_url: impl Into<String>, catalog_url: impl Into<String>) -> Self {
        Self {
            interactions_url: interactions_url.into(),
            catalog_url: catalog_url.into(),
        }
    }

    /// Both documents served from one base URL under their usual file names.
    pub fn from_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self::new(
            format!("{base}/{INTERACTIONS_DOCUMENT}"),
            format!("{base}/{CATALOG_DOCUMENT}"),
        )
    }

    /// Defaults, with each URL overridable from the environment.
    ///
    /// Intended for the bootstrap layer; the core never reads the environment.
    pub fn from_env() -> Self {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            interactions_url: non_empty(INTERACTIONS_URL_ENV)
                .unwrap_or_else(default_interactions_url),
            catalog_url: non_empty(CATALOG_URL_ENV).unwrap_or_else(default_catalog_url),
        }
    }
}

impl Default for ReferenceSources {
    fn default() -> Self {
        Self::new(default_interactions_url(), default_catalog_url())
    }
}
