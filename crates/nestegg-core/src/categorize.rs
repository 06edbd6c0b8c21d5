//! Needs/Wants expense categorization
//!
//! An expense counts as a Need when its name contains any of the essential
//! keywords, case-insensitively. Matching is substring containment rather
//! than whole-word matching, so "Phoneaccessories" lands in Needs via
//! "Phone". That is a known limitation kept for compatibility with how
//! users' earlier summaries were classified.

use std::collections::HashMap;

use serde::Serialize;

/// Keywords that mark an expense as essential
pub const NEED_KEYWORDS: [&str; 9] = [
    "Rent",
    "Mortgage",
    "Groceries",
    "Utilities",
    "Transportation",
    "Phone",
    "Internet",
    "Insurance",
    "Taxes",
];

/// Needs/Wants totals derived from an expense map.
///
/// Never persisted; recomputed from the session on every view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategorizedTotals {
    pub needs: f64,
    pub wants: f64,
}

impl CategorizedTotals {
    pub fn total(&self) -> f64 {
        self.needs + self.wants
    }
}

/// True when the expense name matches an essential-category keyword
pub fn is_need(name: &str) -> bool {
    let name_lower = name.to_lowercase();
    NEED_KEYWORDS
        .iter()
        .any(|keyword| name_lower.contains(&keyword.to_lowercase()))
}

/// Split an expense map into Needs and Wants totals.
///
/// Every expense lands in exactly one bucket, so
/// `needs + wants == sum(amounts)`. An empty map yields zero totals.
pub fn categorize(expenses: &HashMap<String, f64>) -> CategorizedTotals {
    let mut totals = CategorizedTotals::default();
    for (name, amount) in expenses {
        if is_need(name) {
            totals.needs += amount;
        } else {
            totals.wants += amount;
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expenses(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect()
    }

    #[test]
    fn test_empty_map_yields_zero_totals() {
        let totals = categorize(&HashMap::new());
        assert_eq!(totals.needs, 0.0);
        assert_eq!(totals.wants, 0.0);
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let map = expenses(&[
            ("GROCERIES", 100.0),
            ("groceries bill", 50.0),
            ("Monthly Groceries", 25.0),
        ]);
        let totals = categorize(&map);
        assert_eq!(totals.needs, 175.0);
        assert_eq!(totals.wants, 0.0);
    }

    #[test]
    fn test_unmatched_name_is_a_want() {
        let map = expenses(&[("Netflix", 15.0)]);
        let totals = categorize(&map);
        assert_eq!(totals.needs, 0.0);
        assert_eq!(totals.wants, 15.0);
    }

    #[test]
    fn test_substring_containment_not_whole_word() {
        // "Phoneaccessories" contains "Phone" and therefore counts as a Need
        assert!(is_need("Phoneaccessories"));
        let totals = categorize(&expenses(&[("Phoneaccessories", 30.0)]));
        assert_eq!(totals.needs, 30.0);
    }

    #[test]
    fn test_partition_invariant() {
        let map = expenses(&[
            ("Rent", 1000.0),
            ("Groceries", 400.0),
            ("Dining Out", 300.0),
            ("Netflix", 15.0),
        ]);
        let totals = categorize(&map);
        let sum: f64 = map.values().sum();
        assert_eq!(totals.needs, 1400.0);
        assert_eq!(totals.wants, 315.0);
        assert_eq!(totals.total(), sum);
    }

    #[test]
    fn test_all_keywords_classify_as_needs() {
        for keyword in NEED_KEYWORDS {
            assert!(is_need(keyword), "{keyword} should be a need");
        }
    }
}
