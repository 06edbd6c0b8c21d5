//! Expense form interpretation
//!
//! The expense step submits one optional amount per fixed category plus any
//! number of free-form `other_name`/`other_amount` pairs. This module turns
//! that raw submission into the name -> amount map stored in the session.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Fixed categories offered on the expense form
pub const COMMON_EXPENSES: [&str; 10] = [
    "Rent/Mortgage",
    "Groceries",
    "Utilities",
    "Transportation",
    "Phone",
    "Internet",
    "Insurance",
    "Taxes",
    "Entertainment",
    "Dining Out",
];

/// Raw expense-step submission, as decoded from the form body.
///
/// `other_names` and `other_amounts` are kept as parallel arrays in
/// submission order; they are only paired up in [`into_expenses`].
///
/// [`into_expenses`]: ExpenseSubmission::into_expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseSubmission {
    /// (category name, raw amount) for the fixed categories, in form order
    pub fixed: Vec<(String, String)>,
    pub other_names: Vec<String>,
    pub other_amounts: Vec<String>,
}

impl ExpenseSubmission {
    /// Build the expense map.
    ///
    /// Blank amounts are skipped, not stored as zero. The free-form arrays
    /// are zipped positionally; zip truncates to the shorter array, so an
    /// unmatched trailing name or amount is dropped silently. Pairs missing
    /// either half are skipped. Fixed entries are inserted first, so a
    /// free-form name that collides with a fixed category overwrites it.
    pub fn into_expenses(self) -> Result<HashMap<String, f64>> {
        let mut expenses = HashMap::new();

        for (name, raw) in &self.fixed {
            if raw.is_empty() {
                continue;
            }
            expenses.insert(name.clone(), parse_amount(name, raw)?);
        }

        for (name, raw) in self.other_names.iter().zip(self.other_amounts.iter()) {
            if name.is_empty() || raw.is_empty() {
                continue;
            }
            expenses.insert(name.clone(), parse_amount(name, raw)?);
        }

        Ok(expenses)
    }
}

/// Parse the income field from step 1
pub fn parse_income(raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("income must be a number, got {raw:?}")))
}

fn parse_amount(name: &str, raw: &str) -> Result<f64> {
    raw.trim().parse().map_err(|_| {
        Error::InvalidInput(format!("amount for {name:?} must be a number, got {raw:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_blank_fixed_amounts_are_skipped() {
        let submission = ExpenseSubmission {
            fixed: vec![
                ("Rent/Mortgage".to_string(), "".to_string()),
                ("Groceries".to_string(), "200".to_string()),
            ],
            ..Default::default()
        };
        let expenses = submission.into_expenses().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses["Groceries"], 200.0);
    }

    #[test]
    fn test_zip_truncates_to_shorter_array() {
        let submission = ExpenseSubmission {
            other_names: strings(&["Gym", "Books"]),
            other_amounts: strings(&["50"]),
            ..Default::default()
        };
        let expenses = submission.into_expenses().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses["Gym"], 50.0);
    }

    #[test]
    fn test_pairs_missing_either_half_are_skipped() {
        let submission = ExpenseSubmission {
            other_names: strings(&["", "Gym"]),
            other_amounts: strings(&["50", ""]),
            ..Default::default()
        };
        let expenses = submission.into_expenses().unwrap();
        assert!(expenses.is_empty());
    }

    #[test]
    fn test_free_form_name_overwrites_fixed_category() {
        let submission = ExpenseSubmission {
            fixed: vec![("Groceries".to_string(), "200".to_string())],
            other_names: strings(&["Groceries"]),
            other_amounts: strings(&["350"]),
            ..Default::default()
        };
        let expenses = submission.into_expenses().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses["Groceries"], 350.0);
    }

    #[test]
    fn test_non_numeric_amount_is_invalid_input() {
        let submission = ExpenseSubmission {
            fixed: vec![("Groceries".to_string(), "lots".to_string())],
            ..Default::default()
        };
        let err = submission.into_expenses().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_amounts_tolerate_surrounding_whitespace() {
        let submission = ExpenseSubmission {
            fixed: vec![("Groceries".to_string(), " 200.5 ".to_string())],
            ..Default::default()
        };
        let expenses = submission.into_expenses().unwrap();
        assert_eq!(expenses["Groceries"], 200.5);
    }

    #[test]
    fn test_parse_income() {
        assert_eq!(parse_income("3000").unwrap(), 3000.0);
        assert_eq!(parse_income(" 3000.50 ").unwrap(), 3000.5);
        assert!(matches!(
            parse_income("a lot"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(parse_income(""), Err(Error::InvalidInput(_))));
    }
}
