//! Recommendation rules
//!
//! Produces one to three ordered messages from income, categorized totals,
//! and leftover. The comparisons are deliberately literal: a leftover of
//! exactly 10% of income counts as healthy, not small, and a leftover of
//! exactly zero is not overspending. Reformulating the thresholds would
//! shift those boundaries.

use crate::categorize::CategorizedTotals;

const OVERSPENDING: &str =
    "You are spending more than your income. Consider reducing some expenses.";
const SMALL_LEFTOVER: &str = "Your leftover is small. Try to save a little more each month.";
const HEALTHY_LEFTOVER: &str = "You have a healthy leftover. Consider saving or investing it.";
const HIGH_WANTS: &str =
    "You might be spending too much on wants. Try reducing entertainment or dining out.";
const HIGH_NEEDS: &str =
    "Your essential expenses are high. Look for ways to cut costs on necessities.";

/// Derive recommendations for a budget.
///
/// Exactly one leftover-tier message fires, followed by the independent
/// wants and needs checks in that order. Result length is 1-3.
pub fn recommend(income: f64, categorized: &CategorizedTotals, leftover: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    if leftover < 0.0 {
        recommendations.push(OVERSPENDING.to_string());
    } else if leftover < income * 0.1 {
        recommendations.push(SMALL_LEFTOVER.to_string());
    } else {
        recommendations.push(HEALTHY_LEFTOVER.to_string());
    }

    if categorized.wants > income * 0.3 {
        recommendations.push(HIGH_WANTS.to_string());
    }

    if categorized.needs > income * 0.6 {
        recommendations.push(HIGH_NEEDS.to_string());
    }

    recommendations
}
