//! Pure domain types for budget entries, totals, and projection multipliers.
//! No I/O, no CLI. Only data types and their validation rules.

pub mod common;
pub mod entry;
pub mod multiplier;
pub mod totals;

pub use common::{sum_amounts, Amounted, Identifiable, Labelled};
pub use entry::{Entry, EntryKind, MAX_ENTRY_AMOUNT};
pub use multiplier::Multiplier;
pub use totals::BudgetTotals;
