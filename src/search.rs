//! Catalog search: live filtering of the medication reference catalog.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;
use serde_json::json;

use crate::config::{MIN_SEARCH_QUERY_CHARS, SEARCH_EVENT, SEARCH_RESULT_LIMIT};
use crate::models::CatalogEntry;
use crate::telemetry::EventSink;

/// Distinct strengths known for one resolved display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DosageGroup {
    pub name: String,
    pub strengths: Vec<String>,
}

impl DosageGroup {
    pub fn new(name: impl Into<String>, strengths: Vec<String>) -> Self {
        Self {
            name: name.into(),
            strengths,
        }
    }
}

/// Matches for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogSearchResult {
    /// At most [`SEARCH_RESULT_LIMIT`] entries, one per resolved display name,
    /// first occurrence wins.
    pub entries: Vec<CatalogEntry>,
    /// One group per matched display name in first-seen order, each with the
    /// distinct strengths across every match with that name, in catalog order.
    pub dosages: Vec<DosageGroup>,
}

impl CatalogSearchResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.dosages.is_empty()
    }

    pub fn has_dosages_for(&self, display_name: &str) -> bool {
        self.dosages.iter().any(|g| g.name == display_name)
    }

    /// Known strengths for a display name; empty when unknown.
    pub fn dosages_for(&self, display_name: &str) -> &[String] {
        self.dosages
            .iter()
            .find(|g| g.name == display_name)
            .map(|g| g.strengths.as_slice())
            .unwrap_or(&[])
    }
}

/// Whether `query` is long enough to search on.
///
/// Length is counted in Unicode scalar values, so a single emoji or accented
/// letter is one character and does not start a search on its own.
pub fn is_searchable(query: &str) -> bool {
    query.chars().count() > MIN_SEARCH_QUERY_CHARS
}

/// Search the catalog by display, full or brand name.
///
/// Runs only for queries longer than one character against a non-empty
/// catalog; anything else returns an empty result without scanning or
/// emitting. An active search reports one `medication_search` event carrying
/// the raw query; a failing sink is logged and does not affect the result.
pub fn search_catalog(
    query: &str,
    catalog: &[CatalogEntry],
    sink: &dyn EventSink,
) -> CatalogSearchResult {
    if !is_searchable(query) || catalog.is_empty() {
        return CatalogSearchResult::default();
    }

    let needle = query.to_lowercase();
    let mut result = CatalogSearchResult::default();
    // Display name -> position in `result.dosages`.
    let mut groups: HashMap<String, usize> = HashMap::new();

    for entry in catalog.iter().filter(|e| e.matches_lowercase(&needle)) {
        let name = entry.resolved_display_name();
        let index = match groups.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                if result.entries.len() < SEARCH_RESULT_LIMIT {
                    result.entries.push(entry.clone());
                }
                result.dosages.push(DosageGroup::new(name, Vec::new()));
                *slot.insert(result.dosages.len() - 1)
            }
            Entry::Occupied(slot) => *slot.get(),
        };
        let strengths = &mut result.dosages[index].strengths;

        // Keep aggregating past the entry cap.
        if let Some(strength) = entry.strength() {
            if !strengths.iter().any(|s| s == strength) {
                strengths.push(strength.to_string());
            }
        }
    }

    if let Err(e) = sink.capture(SEARCH_EVENT, json!({ "search_term": query })) {
        tracing::warn!(error = %e, "failed to record search event");
    }

    tracing::debug!(
        query,
        entries = result.entries.len(),
        names = result.dosages.len(),
        "catalog search"
    );

    result
}
