use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{CatalogEntry, Frequency, MedicationDraft};
use crate::search::CatalogSearchResult;

/// State of the "add medication" form.
///
/// Typing a name drives the catalog search; picking a result pre-fills the
/// draft and remembers that name's known strengths for the dosage list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddMedicationForm {
    open: bool,
    draft: MedicationDraft,
    search_query: String,
    dosage_query: String,
    dosage_options: Vec<String>,
    dosage_list_open: bool,
}

impl AddMedicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the form. The draft is kept for the next time it opens.
    pub fn cancel(&mut self) {
        self.open = false;
        self.dosage_list_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &MedicationDraft {
        &self.draft
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn dosage_query(&self) -> &str {
        &self.dosage_query
    }

    /// Typed medication name: becomes both the search query and the draft
    /// name, and forgets any previously selected catalog code.
    pub fn type_name(&mut self, text: &str) {
        self.search_query = text.to_string();
        self.draft.name = text.to_string();
        self.draft.rxcui = None;
    }

    /// Pre-fill the draft from a catalog entry and clear the search.
    pub fn select_catalog_entry(&mut self, entry: &CatalogEntry, search: &CatalogSearchResult) {
        let name = entry.resolved_display_name().to_string();
        self.dosage_options = search.dosages_for(&name).to_vec();
        self.draft.name = name;
        self.draft.full_name = entry.full_name.clone().unwrap_or_default();
        self.draft.rxcui = entry.rxcui.clone();
        self.draft.dosage = entry.strength().unwrap_or_default().to_string();
        self.search_query.clear();
    }

    /// Replace the remembered strengths for the current name.
    pub fn set_dosage_options(&mut self, options: Vec<String>) {
        self.dosage_options = options;
    }

    /// Typed dosage: sets the draft dosage and shows the suggestion list.
    pub fn type_dosage(&mut self, text: &str) {
        self.dosage_query = text.to_string();
        self.draft.dosage = text.to_string();
        self.dosage_list_open = true;
    }

    /// Dosage field focused: show suggestions only if there are some.
    pub fn focus_dosage(&mut self) {
        if !self.dosage_options.is_empty() {
            self.dosage_list_open = true;
        }
    }

    pub fn select_dosage(&mut self, dosage: &str) {
        self.draft.dosage = dosage.to_string();
        self.dosage_query.clear();
        self.dosage_list_open = false;
    }

    /// Strengths to offer, empty while the list is closed.
    pub fn dosage_suggestions(&self) -> &[String] {
        if self.dosage_list_open {
            self.dosage_options.as_slice()
        } else {
            &[]
        }
    }

    pub fn is_dosage_list_open(&self) -> bool {
        self.dosage_list_open && !self.dosage_options.is_empty()
    }

    pub fn set_frequency(&mut self, frequency: Option<Frequency>) {
        self.draft.frequency = frequency;
    }

    pub fn set_prescribed_by(&mut self, prescriber: &str) {
        self.draft.prescribed_by = prescriber.to_string();
    }

    pub fn set_prescribed_date(&mut self, date: Option<NaiveDate>) {
        self.draft.prescribed_date = date;
    }

    /// Submission is enabled once name, dosage and frequency are set.
    pub fn can_submit(&self) -> bool {
        self.draft.is_complete()
    }

    /// The catalog entry currently backing the draft.
    pub fn is_selected_entry(&self, entry: &CatalogEntry) -> bool {
        entry.rxcui.is_some() && entry.rxcui == self.draft.rxcui
    }

    pub fn is_selected_dosage(&self, dosage: &str) -> bool {
        self.draft.dosage == dosage
    }

    /// Clear everything and close; used after a successful add.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
