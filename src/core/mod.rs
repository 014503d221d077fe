//! Business logic over the session budget state.
//! Depends on the domain types only. No CLI, no terminal I/O.

pub mod commands;
pub mod heuristics;
pub mod services;
pub mod state;

pub use commands::BudgetCommand;
pub use heuristics::{paired_trend, paired_trend_total, PairedTrend};
pub use state::BudgetState;
