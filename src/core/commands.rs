//! Explicit command handlers driving [`BudgetState`] mutations.
//!
//! A form submission becomes a [`BudgetCommand`]; applying it yields either the
//! updated state or the validation error that rejected it.

use tracing::info;

use crate::core::state::BudgetState;
use crate::domain::{EntryKind, Multiplier};
use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub enum BudgetCommand {
    SubmitIncome { label: String, amount: f64 },
    SubmitExpense { label: String, amount: f64 },
    /// Picks a projection multiplier from the preset menu.
    SelectMultiplier(f64),
}

impl BudgetCommand {
    pub fn submit(kind: EntryKind, label: impl Into<String>, amount: f64) -> Self {
        let label = label.into();
        match kind {
            EntryKind::Income => BudgetCommand::SubmitIncome { label, amount },
            EntryKind::Expense => BudgetCommand::SubmitExpense { label, amount },
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BudgetCommand::SubmitIncome { .. } => "submit_income",
            BudgetCommand::SubmitExpense { .. } => "submit_expense",
            BudgetCommand::SelectMultiplier(_) => "select_multiplier",
        }
    }
}

impl BudgetState {
    /// Consumes the state and returns it with `command` applied.
    pub fn apply(mut self, command: BudgetCommand) -> Result<BudgetState, ValidationError> {
        self.apply_in_place(&command)?;
        Ok(self)
    }

    /// Applies `command` to the state, leaving it unchanged on error.
    pub fn apply_in_place(&mut self, command: &BudgetCommand) -> Result<(), ValidationError> {
        match command {
            BudgetCommand::SubmitIncome { label, amount } => {
                self.add_income(label, *amount)?;
            }
            BudgetCommand::SubmitExpense { label, amount } => {
                self.add_expense(label, *amount)?;
            }
            BudgetCommand::SelectMultiplier(value) => {
                self.set_multiplier(Multiplier::preset(*value)?);
            }
        }
        info!(command = command.name(), "budget command applied");
        Ok(())
    }
}
