//! HTTP request handlers for the three wizard steps
//!
//! Each submodule covers one step of the flow.

pub mod expenses;
pub mod income;
pub mod reports;

// Re-export all handlers for use in router
pub use expenses::*;
pub use income::*;
pub use reports::*;
