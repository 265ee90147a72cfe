use serde::{Deserialize, Serialize};

/// The patient whose medication list is being tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub patient_id: String,
}

impl PatientProfile {
    pub fn new(name: impl Into<String>, patient_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            patient_id: patient_id.into(),
        }
    }
}
