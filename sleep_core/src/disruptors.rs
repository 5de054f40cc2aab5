//! # Sleep Disruptor Catalog
//!
//! The fixed table of sleep problems the calculator knows about, each with an
//! estimated yearly financial impact. The table is compiled in and never
//! mutated; an id index is built on first use and shared read-only.
//!
//! Selections are matched by id. Ids that are not in the catalog are ignored:
//! they add no cost and do not count as a disruptor. This departs from the
//! original calculator, which counted every selected id (known or not) toward
//! the productivity loss and the score; here an unknown id changes nothing.
//!
//! ## Example
//!
//! ```rust
//! use sleep_core::disruptors::{calculate_disruptor_cost, find_disruptor};
//!
//! assert_eq!(find_disruptor("snoring-apnea").unwrap().annual_cost, 3000.0);
//! assert_eq!(calculate_disruptor_cost(["hot-sleep", "allergies", "typo"]), 2000.0);
//! ```

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use serde::Serialize;

/// A named sleep-quality problem with its estimated annual cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SleepDisruptor {
    /// Stable identifier used in inputs (e.g., "snoring-apnea")
    pub id: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Estimated yearly cost in dollars
    pub annual_cost: f64,
    /// What the cost is made of
    pub description: &'static str,
}

/// All known disruptors, in display order.
pub static SLEEP_DISRUPTORS: [SleepDisruptor; 9] = [
    SleepDisruptor {
        id: "back-neck-pain",
        label: "Back/Neck Pain",
        annual_cost: 1200.0,
        description: "Chiropractor visits, pain medication, lost productivity",
    },
    SleepDisruptor {
        id: "hot-sleep",
        label: "Hot Sleep / Night Sweats",
        annual_cost: 800.0,
        description: "AC costs, bedding replacements, sleep aids",
    },
    SleepDisruptor {
        id: "partner-disturbance",
        label: "Partner Disturbance",
        annual_cost: 1500.0,
        description: "Reduced sleep quality, separate bedroom costs",
    },
    SleepDisruptor {
        id: "snoring-apnea",
        label: "Snoring / Sleep Apnea",
        annual_cost: 3000.0,
        description: "Medical consultations, sleep studies, equipment",
    },
    SleepDisruptor {
        id: "restless-sleep",
        label: "Restless Sleeping",
        annual_cost: 600.0,
        description: "Sleep aids, bedding wear, energy costs",
    },
    SleepDisruptor {
        id: "morning-fatigue",
        label: "Morning Fatigue",
        annual_cost: 400.0,
        description: "Coffee, energy drinks, productivity loss",
    },
    SleepDisruptor {
        id: "general-pain",
        label: "General Pain (Arthritis, Fibromyalgia)",
        annual_cost: 2500.0,
        description: "Medical treatments, medications, therapy",
    },
    SleepDisruptor {
        id: "allergies",
        label: "Allergies (Dust, Mold, Pet Dander)",
        annual_cost: 1200.0,
        description: "Air purifiers, medications, cleaning supplies",
    },
    SleepDisruptor {
        id: "acid-reflux",
        label: "Acid Reflux / GERD",
        annual_cost: 1800.0,
        description: "Medications, elevated pillow systems, dietary restrictions",
    },
];

static BY_ID: Lazy<HashMap<&'static str, &'static SleepDisruptor>> =
    Lazy::new(|| SLEEP_DISRUPTORS.iter().map(|d| (d.id, d)).collect());

/// Look up a disruptor by id.
pub fn find_disruptor(id: &str) -> Option<&'static SleepDisruptor> {
    BY_ID.get(id).copied()
}

/// Resolve selected ids to catalog entries.
///
/// Duplicates collapse, unknown ids are dropped, and the result follows
/// catalog order regardless of selection order.
pub fn resolve_disruptors<I, S>(selected_ids: I) -> Vec<&'static SleepDisruptor>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unknown = Vec::new();
    let matched: BTreeSet<&'static str> = selected_ids
        .into_iter()
        .filter_map(|id| {
            let id = id.as_ref();
            match find_disruptor(id) {
                Some(d) => Some(d.id),
                None => {
                    unknown.push(id.to_string());
                    None
                }
            }
        })
        .collect();

    if !unknown.is_empty() {
        tracing::warn!(ids = ?unknown, "ignoring unknown disruptor ids");
    }

    SLEEP_DISRUPTORS
        .iter()
        .filter(|d| matched.contains(d.id))
        .collect()
}

/// Total annual cost of the selected disruptors.
///
/// Unknown ids contribute zero; repeated ids are counted once.
pub fn calculate_disruptor_cost<I, S>(selected_ids: I) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    total_annual_cost(&resolve_disruptors(selected_ids))
}

/// Sum of the annual costs of already resolved disruptors.
///
/// Folds from `+0.0` so an empty selection is `0.0`, never `-0.0`.
pub fn total_annual_cost(disruptors: &[&SleepDisruptor]) -> f64 {
    disruptors.iter().fold(0.0, |acc, d| acc + d.annual_cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: BTreeSet<_> = SLEEP_DISRUPTORS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), SLEEP_DISRUPTORS.len());
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert_eq!(find_disruptor("acid-reflux").unwrap().label, "Acid Reflux / GERD");
        assert!(find_disruptor("Acid-Reflux").is_none());
        assert!(find_disruptor("").is_none());
    }

    #[test]
    fn test_empty_selection_costs_nothing() {
        let cost = calculate_disruptor_cost(Vec::<String>::new());
        assert_eq!(cost, 0.0);
        assert!(cost.is_sign_positive());
        assert_eq!(serde_json::to_string(&cost).unwrap(), "0.0");
    }

    #[test]
    fn test_unknown_ids_ignored() {
        assert_eq!(calculate_disruptor_cost(["snoring-apnea"]), 3000.0);
        assert_eq!(calculate_disruptor_cost(["snoring-apnea", "bad-dreams"]), 3000.0);
    }

    #[test]
    fn test_duplicates_counted_once() {
        assert_eq!(calculate_disruptor_cost(["hot-sleep", "hot-sleep"]), 800.0);
        assert_eq!(resolve_disruptors(["hot-sleep", "hot-sleep"]).len(), 1);
    }

    #[test]
    fn test_resolve_follows_catalog_order() {
        let resolved = resolve_disruptors(["acid-reflux", "back-neck-pain", "hot-sleep"]);
        let ids: Vec<_> = resolved.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["back-neck-pain", "hot-sleep", "acid-reflux"]);
    }

    #[test]
    fn test_all_disruptors_total() {
        let total = calculate_disruptor_cost(SLEEP_DISRUPTORS.iter().map(|d| d.id));
        // 1200 + 800 + 1500 + 3000 + 600 + 400 + 2500 + 1200 + 1800
        assert_eq!(total, 13000.0);
    }
}
