//! Nestegg Core Library
//!
//! Shared functionality for the nestegg budgeting wizard:
//! - Needs/Wants categorization of itemized expenses
//! - Recommendation rules over income, categorized totals, and leftover
//! - Per-visitor session state for the three-step flow
//! - Expense form interpretation (fixed categories plus free-form pairs)
//! - Chart rendering behind a pluggable trait

pub mod advise;
pub mod categorize;
pub mod chart;
pub mod error;
pub mod intake;
pub mod models;

pub use advise::recommend;
pub use categorize::{categorize, CategorizedTotals, NEED_KEYWORDS};
pub use chart::{BarChartRenderer, ChartRenderer, ChartSeries, StubChartRenderer};
pub use error::{Error, Result};
pub use intake::{parse_income, ExpenseSubmission, COMMON_EXPENSES};
pub use models::{SessionState, Stage};
