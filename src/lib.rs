pub mod config;
pub mod interactions;
pub mod medications;
pub mod models;
pub mod reference;
pub mod search;
pub mod telemetry;
pub mod tracker;

pub use interactions::{interaction_partners, resolve_interactions};
pub use medications::{AddMedicationForm, MedicationList};
pub use reference::{
    fetch_reference_tables, FileReferenceFetcher, HttpReferenceFetcher, ReferenceError,
    ReferenceFetcher, ReferenceTables,
};
pub use search::{search_catalog, CatalogSearchResult, DosageGroup};
pub use tracker::MedicationTracker;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins; otherwise [`config::default_log_filter`] applies. Safe to
/// call more than once: later calls leave the first subscriber in place.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

/// Build a tracker for `patient` and load reference data from the configured
/// host.
///
/// Never fails: if the HTTP client cannot be built or either document cannot
/// be fetched, the problem is logged and the tracker starts with empty tables.
pub async fn start_session(patient: models::PatientProfile) -> MedicationTracker {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let mut tracker = MedicationTracker::new(patient);
    match HttpReferenceFetcher::new(config::ReferenceSources::from_env()) {
        Ok(fetcher) => {
            tracker.load_reference_data(&fetcher).await;
        }
        Err(e) => tracing::error!(error = %e, "Error loading reference data"),
    }
    tracker
}
