#![doc(test(attr(deny(warnings))))]

//! Budget Calc aggregates a session's income and expense entries into totals,
//! net income, and an expected-income projection, and ships a small shell that
//! renders them as text tables and charts.
//!
//! ```
//! use budget_calc::core::BudgetState;
//! use budget_calc::domain::Multiplier;
//!
//! let mut state = BudgetState::new();
//! state.add_income("Salary", 3000.0).unwrap();
//! state.add_expense("Rent", 1000.0).unwrap();
//!
//! let totals = state.totals();
//! assert_eq!(totals.net_income, 2000.0);
//! assert_eq!(state.projected_income(Multiplier::new(2.0).unwrap()), 2000.0);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

pub use crate::core::{BudgetCommand, BudgetState};
pub use crate::domain::{BudgetTotals, Entry, EntryKind, Multiplier};
pub use crate::errors::{BudgetError, ValidationError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Budget Calc tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
