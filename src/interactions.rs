//! Interaction resolution: which reference rules apply to the current list.

use crate::models::{ActiveInteraction, InteractionRule, Medication};

/// Rules whose two drugs both appear on the medication list.
///
/// A drug is present when some medication's full name contains the drug name,
/// ignoring case. Output follows the rule table order; a rule repeated in the
/// table is reported once per occurrence. Medications with an empty full name
/// never participate.
///
/// An empty drug name is contained in every string, so that side of a rule
/// counts as present as soon as any medication with a full name is held.
/// Rules are taken as published; a blank side is not filtered out here.
///
/// Each side of a rule is checked independently, so a single medication whose
/// full name contains both drug names satisfies the rule on its own, as does
/// a rule naming the same drug twice. This mirrors the established behavior
/// and may over-report combination products.
///
/// Cost is O(rules x medications) substring checks. Fine for a personal list
/// against a few hundred rules; index the table before using it at larger
/// scale.
pub fn resolve_interactions(
    medications: &[Medication],
    rules: &[InteractionRule],
) -> Vec<ActiveInteraction> {
    let full_names: Vec<String> = medications
        .iter()
        .filter(|m| !m.full_name.is_empty())
        .map(|m| m.full_name.to_lowercase())
        .collect();

    if full_names.is_empty() {
        return Vec::new();
    }

    let is_present = |drug: &str| {
        let needle = drug.to_lowercase();
        full_names.iter().any(|name| name.contains(&needle))
    };

    let mut active = Vec::new();
    for rule in rules {
        let drug1_present = is_present(rule.drug1.as_str());
        let drug2_present = is_present(rule.drug2.as_str());
        if drug1_present && drug2_present {
            tracing::debug!(drug1 = %rule.drug1, drug2 = %rule.drug2, "interaction matched");
            active.push(ActiveInteraction::from(rule));
        }
    }
    active
}

/// Every drug that has a rule with `drug`, in table order.
///
/// Exact, case-sensitive comparison against either side of each rule.
pub fn interaction_partners<'a>(rules: &'a [InteractionRule], drug: &str) -> Vec<&'a str> {
    rules.iter().filter_map(|rule| rule.partner_of(drug)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn med(full_name: &str) -> Medication {
        Medication {
            id: Uuid::new_v4(),
            name: full_name.split_whitespace().next().unwrap_or("").to_string(),
            full_name: full_name.to_string(),
            rxcui: None,
            dosage: "1 tab".into(),
            frequency: Frequency::OnceDaily,
            prescribed_by: "Current Provider".into(),
            prescribed_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    fn bleeding_rule() -> InteractionRule {
        InteractionRule::new("Aspirin", "Warfarin", "Increased bleeding risk")
    }

    #[test]
    fn aspirin_and_warfarin_interact() {
        let meds = vec![med("Aspirin 81mg Tablet"), med("Warfarin Sodium 5mg Tablet")];
        let active = resolve_interactions(&meds, &[bleeding_rule()]);

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].description, "Increased bleeding risk");
        assert_eq!(active[0].medications, ["Aspirin".to_string(), "Warfarin".to_string()]);
    }

    #[test]
    fn missing_partner_yields_nothing() {
        let meds = vec![med("Aspirin 81mg Tablet")];
        assert!(resolve_interactions(&meds, &[bleeding_rule()]).is_empty());
    }

    #[test]
    fn match_ignores_case() {
        let meds = vec![med("ASPIRIN 81MG"), med("warfarin sodium")];
        let rules = vec![InteractionRule::new("aspirin", "WARFARIN", "Bleeding")];
        assert_eq!(resolve_interactions(&meds, &rules).len(), 1);
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        assert!(resolve_interactions(&[], &[bleeding_rule()]).is_empty());
        assert!(resolve_interactions(&[med("Aspirin 81mg")], &[]).is_empty());
    }

    #[test]
    fn blank_drug_name_matches_any_held_medication() {
        let meds = vec![med("Aspirin 81mg Tablet")];
        let rules = vec![InteractionRule::new("", "Aspirin", "blank side")];
        let active = resolve_interactions(&meds, &rules);

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].medications, ["".to_string(), "Aspirin".to_string()]);
    }

    #[test]
    fn empty_full_name_never_participates() {
        let rules = vec![InteractionRule::new("", "", "blank rule")];
        assert!(resolve_interactions(&[med("")], &rules).is_empty());

        let meds = vec![med(""), med("Warfarin 5mg")];
        let rules = vec![InteractionRule::new("Aspirin", "Warfarin", "needs aspirin")];
        assert!(resolve_interactions(&meds, &rules).is_empty());
    }

    #[test]
    fn output_follows_table_order_without_dedup() {
        let meds = vec![
            med("Aspirin 81mg"),
            med("Warfarin 5mg"),
            med("Ibuprofen 200mg"),
        ];
        let rules = vec![
            InteractionRule::new("Ibuprofen", "Aspirin", "Reduced cardioprotection"),
            InteractionRule::new("Metformin", "Aspirin", "not active"),
            bleeding_rule(),
            bleeding_rule(),
        ];
        let active = resolve_interactions(&meds, &rules);
        let descriptions: Vec<&str> = active.iter().map(|a| a.description.as_str()).collect();
        assert_eq!(
            descriptions,
            ["Reduced cardioprotection", "Increased bleeding risk", "Increased bleeding risk"]
        );
    }

    #[test]
    fn single_combination_product_satisfies_both_sides() {
        let meds = vec![med("Aspirin / Warfarin combination")];
        let active = resolve_interactions(&meds, &[bleeding_rule()]);
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn same_drug_on_both_sides_is_reported() {
        let meds = vec![med("Aspirin 81mg")];
        let rules = vec![InteractionRule::new("Aspirin", "Aspirin", "Duplicate therapy")];
        assert_eq!(resolve_interactions(&meds, &rules).len(), 1);
    }

    #[test]
    fn every_reported_rule_is_sound() {
        let meds = vec![med("Lisinopril 10mg"), med("Potassium Chloride 20mEq"), med("Aspirin 81mg")];
        let rules = vec![
            InteractionRule::new("Lisinopril", "Potassium", "Hyperkalemia"),
            InteractionRule::new("Lisinopril", "Spironolactone", "Hyperkalemia"),
            InteractionRule::new("potassium chloride", "aspirin", "GI irritation"),
            bleeding_rule(),
        ];
        let names: Vec<String> = meds.iter().map(|m| m.full_name.to_lowercase()).collect();
        let present = |d: &str| names.iter().any(|n| n.contains(&d.to_lowercase()));

        let active = resolve_interactions(&meds, &rules);
        for a in &active {
            assert!(present(a.medications[0].as_str()) && present(a.medications[1].as_str()));
        }
        let expected = rules
            .iter()
            .filter(|r| present(r.drug1.as_str()) && present(r.drug2.as_str()))
            .count();
        assert_eq!(active.len(), expected);
        assert_eq!(expected, 2);
    }

    #[test]
    fn partners_listed_from_either_side() {
        let rules = vec![
            InteractionRule::new("Ivermectin", "Warfarin", "a"),
            InteractionRule::new("Aspirin", "Warfarin", "b"),
            InteractionRule::new("Quinidine", "Ivermectin", "c"),
        ];
        assert_eq!(interaction_partners(&rules, "Ivermectin"), ["Warfarin", "Quinidine"]);
        assert!(interaction_partners(&rules, "Metformin").is_empty());
    }
}
