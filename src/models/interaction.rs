use serde::{Deserialize, Deserializer, Serialize};

/// A known pairwise drug interaction from the reference table.
///
/// Missing keys and `null` values read as empty strings, so one sparse row
/// never fails the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRule {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub drug1: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub drug2: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interaction: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl InteractionRule {
    pub fn new(
        drug1: impl Into<String>,
        drug2: impl Into<String>,
        interaction: impl Into<String>,
    ) -> Self {
        Self {
            drug1: drug1.into(),
            drug2: drug2.into(),
            interaction: interaction.into(),
        }
    }

    /// The other drug of the pair, when `drug` is exactly one side of it.
    pub fn partner_of(&self, drug: &str) -> Option<&str> {
        if self.drug1 == drug {
            Some(&self.drug2)
        } else if self.drug2 == drug {
            Some(&self.drug1)
        } else {
            None
        }
    }
}

/// An interaction rule whose two drugs are both on the medication list.
/// Derived on every change, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveInteraction {
    pub description: String,
    /// `[drug1, drug2]` spelled as in the rule.
    pub medications: [String; 2],
}

impl From<&InteractionRule> for ActiveInteraction {
    fn from(rule: &InteractionRule) -> Self {
        Self {
            description: rule.interaction.clone(),
            medications: [rule.drug1.clone(), rule.drug2.clone()],
        }
    }
}
