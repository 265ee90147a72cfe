use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Frequency;

/// A medication recorded by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub full_name: String,
    pub rxcui: Option<String>,
    pub dosage: String,
    pub frequency: Frequency,
    pub prescribed_by: String,
    pub prescribed_date: NaiveDate,
}

/// Candidate medication being filled in by the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationDraft {
    pub name: String,
    pub full_name: String,
    pub rxcui: Option<String>,
    pub dosage: String,
    pub frequency: Option<Frequency>,
    pub prescribed_by: String,
    pub prescribed_date: Option<NaiveDate>,
}

impl MedicationDraft {
    /// Name, dosage and frequency are required before submission.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.dosage.is_empty() && self.frequency.is_some()
    }
}
