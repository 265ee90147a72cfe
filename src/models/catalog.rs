use serde::{Deserialize, Serialize};

/// One record of the medication reference catalog.
///
/// Every field is optional; missing keys and JSON `null` both read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct CatalogEntry {
    pub rxcui: Option<String>,
    pub generic_rxcui: Option<String>,
    pub tty: Option<String>,
    pub full_name: Option<String>,
    pub rxn_dose_form: Option<String>,
    pub full_generic_name: Option<String>,
    pub brand_name: Option<String>,
    pub display_name: Option<String>,
    pub route: Option<String>,
    pub new_dose_form: Option<String>,
    pub strength: Option<String>,
    pub suppress_for: Option<String>,
    pub display_name_synonym: Option<String>,
    pub is_retired: Option<String>,
    pub sxdg_rxcui: Option<String>,
    pub sxdg_tty: Option<String>,
    pub sxdg_name: Option<String>,
    pub psn: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl CatalogEntry {
    /// First non-empty of display name, full name, brand name; `""` otherwise.
    pub fn resolved_display_name(&self) -> &str {
        present(&self.display_name)
            .or_else(|| present(&self.full_name))
            .or_else(|| present(&self.brand_name))
            .unwrap_or("")
    }

    /// Non-empty strength, if the catalog records one.
    pub fn strength(&self) -> Option<&str> {
        present(&self.strength)
    }

    /// Case-insensitive containment of `query` in display, full or brand name.
    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }

    /// Same as [`matches`](Self::matches) with an already lowercased needle.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.display_name, &self.full_name, &self.brand_name]
            .into_iter()
            .filter_map(present)
            .any(|field| field.to_lowercase().contains(needle))
    }
}
