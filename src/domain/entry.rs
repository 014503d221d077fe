//! Domain types representing income sources and expense categories.

use std::{fmt, str::FromStr};

use serde::Serialize;
use uuid::Uuid;

use crate::domain::common::*;
use crate::errors::ValidationError;

/// Largest amount a single entry may carry.
///
/// Keeps collection totals finite: overflowing `f64` would take more entries
/// than a session can hold.
pub const MAX_ENTRY_AMOUNT: f64 = 1e12;

/// One labeled amount belonging to either the income or expense collection.
///
/// Entries are only obtainable through [`Entry::validated`], so every value in
/// circulation carries a non-empty trimmed label and a strictly positive,
/// finite amount no larger than [`MAX_ENTRY_AMOUNT`]. Two entries with the
/// same label are still distinct: each receives its own id.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Entry {
    id: Uuid,
    label: String,
    amount: f64,
}

impl Entry {
    /// Trims `label` and checks both fields before building the entry.
    pub fn validated(label: &str, amount: f64) -> Result<Self, ValidationError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ValidationError::EmptyLabel);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount(amount));
        }
        if amount > MAX_ENTRY_AMOUNT {
            return Err(ValidationError::AmountTooLarge(amount));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            label: label.to_string(),
            amount,
        })
    }

    /// Returns the entry as a `(label, amount)` pair for charting.
    pub fn as_pair(&self) -> (String, f64) {
        (self.label.clone(), self.amount)
    }
}

impl Identifiable for Entry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Labelled for Entry {
    fn label(&self) -> &str {
        &self.label
    }
}

impl Amounted for Entry {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Which collection an entry belongs to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Income, EntryKind::Expense];
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" | "incomes" => Ok(EntryKind::Income),
            "expense" | "expenses" => Ok(EntryKind::Expense),
            other => Err(format!(
                "unknown entry kind `{}` (expected `income` or `expense`)",
                other
            )),
        }
    }
}
