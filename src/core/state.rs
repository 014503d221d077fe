//! Session-scoped budget state and the aggregation operations over it.

use tracing::{debug, warn};

use crate::domain::{
    sum_amounts, BudgetTotals, Entry, EntryKind, Identifiable, Labelled, Multiplier,
};
use crate::errors::ValidationError;

/// Income and expense entries collected during a single session.
///
/// Entries are append-only: there is no edit or delete operation, and a
/// rejected add leaves both sequences untouched. Every derived figure is
/// recomputed from the sequences on each query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetState {
    incomes: Vec<Entry>,
    expenses: Vec<Entry>,
    multiplier: Multiplier,
}

impl BudgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an empty session with a custom projection multiplier.
    pub fn with_multiplier(multiplier: Multiplier) -> Self {
        Self {
            multiplier,
            ..Self::default()
        }
    }

    pub fn add_income(&mut self, label: &str, amount: f64) -> Result<Entry, ValidationError> {
        self.push_entry(EntryKind::Income, label, amount)
    }

    pub fn add_expense(&mut self, label: &str, amount: f64) -> Result<Entry, ValidationError> {
        self.push_entry(EntryKind::Expense, label, amount)
    }

    fn push_entry(
        &mut self,
        kind: EntryKind,
        label: &str,
        amount: f64,
    ) -> Result<Entry, ValidationError> {
        let entry = Entry::validated(label, amount).map_err(|err| {
            warn!(%kind, label, amount, error = %err, "rejected budget entry");
            err
        })?;
        debug!(%kind, id = %entry.id(), label = entry.label(), amount, "accepted budget entry");
        self.entries_mut(kind).push(entry.clone());
        Ok(entry)
    }

    pub fn totals(&self) -> BudgetTotals {
        BudgetTotals::from_sums(self.total(EntryKind::Income), self.total(EntryKind::Expense))
    }

    /// Sum of the amounts in one collection; `0.0` when it is empty.
    pub fn total(&self, kind: EntryKind) -> f64 {
        sum_amounts(self.entries(kind))
    }

    /// Total expenses scaled by `multiplier`.
    pub fn projected_income(&self, multiplier: Multiplier) -> f64 {
        self.total(EntryKind::Expense) * multiplier.value()
    }

    /// Projection at the multiplier currently selected for the session.
    pub fn expected_income(&self) -> f64 {
        self.projected_income(self.multiplier)
    }

    /// Entries as `(label, amount)` pairs in insertion order.
    ///
    /// Entries sharing a label stay separate; grouping is left to the
    /// rendering side.
    pub fn breakdown(&self, kind: EntryKind) -> Vec<(String, f64)> {
        self.entries(kind).iter().map(Entry::as_pair).collect()
    }

    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.incomes,
            EntryKind::Expense => &self.expenses,
        }
    }

    fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.incomes,
            EntryKind::Expense => &mut self.expenses,
        }
    }

    pub fn incomes(&self) -> &[Entry] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[Entry] {
        &self.expenses
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    pub fn set_multiplier(&mut self, multiplier: Multiplier) {
        debug!(%multiplier, "projection multiplier selected");
        self.multiplier = multiplier;
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }
}
