//! The user's medication list and the form used to add to it.
//!
//! Entries are never edited in place: they are appended by a completed draft
//! and dropped by id.

pub mod form;

pub use form::AddMedicationForm;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::config::DEFAULT_PRESCRIBER;
use crate::models::{Medication, MedicationDraft};

/// Medications currently recorded, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MedicationList {
    items: Vec<Medication>,
}

impl MedicationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a medication built from `draft`.
    ///
    /// Returns `None` and leaves the list untouched unless name, dosage and
    /// frequency are all filled in. Missing prescriber and date default to
    /// the placeholder provider and today's local date.
    pub fn add(&mut self, draft: &MedicationDraft) -> Option<&Medication> {
        let today = chrono::Local::now().date_naive();
        let medication = build_medication(draft, today)?;
        tracing::info!(id = %medication.id, name = %medication.name, "medication added");
        self.items.push(medication);
        self.items.last()
    }

    /// Drop the medication with `id`. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|m| m.id != *id);
        let removed = self.items.len() != before;
        if removed {
            tracing::info!(%id, "medication removed");
        }
        removed
    }

    pub fn get(&self, id: &Uuid) -> Option<&Medication> {
        self.items.iter().find(|m| m.id == *id)
    }

    pub fn as_slice(&self) -> &[Medication] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Medication> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a MedicationList {
    type Item = &'a Medication;
    type IntoIter = std::slice::Iter<'a, Medication>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn build_medication(draft: &MedicationDraft, today: NaiveDate) -> Option<Medication> {
    if !draft.is_complete() {
        return None;
    }
    let frequency = draft.frequency?;

    let prescribed_by = if draft.prescribed_by.is_empty() {
        DEFAULT_PRESCRIBER.to_string()
    } else {
        draft.prescribed_by.clone()
    };

    Some(Medication {
        id: Uuid::new_v4(),
        name: draft.name.clone(),
        full_name: draft.full_name.clone(),
        rxcui: draft.rxcui.clone().filter(|c| !c.is_empty()),
        dosage: draft.dosage.clone(),
        frequency,
        prescribed_by,
        prescribed_date: draft.prescribed_date.unwrap_or(today),
    })
}
