//! Session state for the three-step wizard flow

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Where a visitor is in the income -> expenses -> results flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Empty,
    HasIncome,
    HasIncomeAndExpenses,
}

/// Everything nestegg remembers about one visitor.
///
/// Created on the first income submission and mutated by the expense step;
/// the results and recommendations views only read it. There is no explicit
/// destruction - the state expires with the session that holds it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Monthly income. Expected non-negative but not validated beyond parsing.
    pub income: Option<f64>,
    /// Expense name -> amount. Names are unique; a re-submission replaces
    /// the whole map rather than merging into it.
    pub expenses: Option<HashMap<String, f64>>,
}

impl SessionState {
    pub fn stage(&self) -> Stage {
        match (&self.income, &self.expenses) {
            (None, _) => Stage::Empty,
            (Some(_), None) => Stage::HasIncome,
            (Some(_), Some(_)) => Stage::HasIncomeAndExpenses,
        }
    }

    pub fn set_income(&mut self, income: f64) {
        self.income = Some(income);
    }

    /// Replace the stored expenses entirely. Prior entries are discarded,
    /// not merged.
    pub fn set_expenses(&mut self, expenses: HashMap<String, f64>) {
        self.expenses = Some(expenses);
    }

    /// True when an expense map was submitted and holds at least one entry.
    pub fn has_expenses(&self) -> bool {
        self.expenses.as_ref().is_some_and(|e| !e.is_empty())
    }
}
