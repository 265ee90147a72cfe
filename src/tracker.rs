//! Session state for one patient's tracker.
//!
//! `MedicationTracker` owns the reference tables, the medication list and the
//! add form, and keeps two derived views current: the active interactions and
//! the catalog search result. Every method that changes an input recomputes
//! the views depending on it before returning, so reads never see stale data.

use uuid::Uuid;

use crate::interactions::resolve_interactions;
use crate::medications::{AddMedicationForm, MedicationList};
use crate::models::{ActiveInteraction, Medication, PatientProfile};
use crate::reference::{fetch_reference_tables, ReferenceFetcher, ReferenceTables};
use crate::search::{search_catalog, CatalogSearchResult};
use crate::telemetry::{EventSink, TracingSink};

pub struct MedicationTracker {
    patient: PatientProfile,
    tables: ReferenceTables,
    medications: MedicationList,
    form: AddMedicationForm,
    /// Derived from `medications` and `tables.interactions`.
    interactions: Vec<ActiveInteraction>,
    /// Derived from the form's search query and `tables.catalog`.
    search: CatalogSearchResult,
    sink: Box<dyn EventSink>,
}

impl MedicationTracker {
    /// Empty tracker reporting search events to the log.
    pub fn new(patient: PatientProfile) -> Self {
        Self::with_sink(patient, Box::new(TracingSink))
    }

    pub fn with_sink(patient: PatientProfile, sink: Box<dyn EventSink>) -> Self {
        Self {
            patient,
            tables: ReferenceTables::default(),
            medications: MedicationList::new(),
            form: AddMedicationForm::new(),
            interactions: Vec::new(),
            search: CatalogSearchResult::default(),
            sink,
        }
    }

    // ── Reads ───────────────────────────────────────────────

    pub fn patient(&self) -> &PatientProfile {
        &self.patient
    }

    pub fn reference_tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn medications(&self) -> &[Medication] {
        self.medications.as_slice()
    }

    pub fn interactions(&self) -> &[ActiveInteraction] {
        &self.interactions
    }

    pub fn search_result(&self) -> &CatalogSearchResult {
        &self.search
    }

    pub fn form(&self) -> &AddMedicationForm {
        &self.form
    }

    /// Direct access for form edits that feed no derived view (frequency,
    /// prescriber, date, dosage typing). Name typing and catalog selection
    /// go through the tracker so the search stays current.
    pub fn form_mut(&mut self) -> &mut AddMedicationForm {
        &mut self.form
    }

    // ── Reference data ──────────────────────────────────────

    /// Fetch both reference documents and apply them together.
    ///
    /// On any failure the error is logged and the current tables stay as they
    /// were. Returns whether new tables were applied.
    pub async fn load_reference_data<F: ReferenceFetcher>(&mut self, fetcher: &F) -> bool {
        match fetch_reference_tables(fetcher).await {
            Ok(tables) => {
                self.apply_reference_tables(tables);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading reference data");
                false
            }
        }
    }

    pub fn apply_reference_tables(&mut self, tables: ReferenceTables) {
        self.tables = tables;
        self.recompute_interactions();
        self.recompute_search();
    }

    // ── Medication list ─────────────────────────────────────

    /// Submit the add form.
    ///
    /// Incomplete drafts are ignored and the form stays open. On success the
    /// form is reset and closed; the new id is returned.
    pub fn submit_add_form(&mut self) -> Option<Uuid> {
        let id = self.medications.add(self.form.draft())?.id;
        self.form.reset();
        self.recompute_interactions();
        self.recompute_search();
        Some(id)
    }

    /// Remove a medication; unknown ids change nothing.
    pub fn remove_medication(&mut self, id: &Uuid) -> bool {
        let removed = self.medications.remove(id);
        if removed {
            self.recompute_interactions();
        }
        removed
    }

    // ── Add form ────────────────────────────────────────────

    pub fn open_add_form(&mut self) {
        self.form.open();
    }

    pub fn cancel_add_form(&mut self) {
        self.form.cancel();
    }

    /// Medication name typed into the form; re-runs the catalog search.
    pub fn type_medication_name(&mut self, text: &str) {
        self.form.type_name(text);
        self.recompute_search();
        let options = self.search.dosages_for(&self.form.draft().name).to_vec();
        self.form.set_dosage_options(options);
    }

    /// Pick the `index`-th search result. Out-of-range indexes are ignored.
    pub fn select_search_result(&mut self, index: usize) -> bool {
        let Some(entry) = self.search.entries.get(index).cloned() else {
            return false;
        };
        self.form.select_catalog_entry(&entry, &self.search);
        self.recompute_search();
        true
    }

    pub fn select_dosage(&mut self, dosage: &str) {
        self.form.select_dosage(dosage);
    }

    // ── Derived views ───────────────────────────────────────

    fn recompute_interactions(&mut self) {
        self.interactions =
            resolve_interactions(self.medications.as_slice(), &self.tables.interactions);
    }

    fn recompute_search(&mut self) {
        self.search = search_catalog(
            self.form.search_query(),
            &self.tables.catalog,
            self.sink.as_ref(),
        );
    }
}
