//! Toy heuristics layered on top of the aggregated entries.
//!
//! Nothing here is a forecast. The paired trend fits a straight line through
//! the handful of entries the user typed in and reports the result as-is, with
//! no holdout data. With an intercept term, the sum of fitted values of an
//! ordinary least squares fit always equals the sum of the observed incomes, so
//! the figure carries no information that the raw totals do not.

use serde::Serialize;

use crate::core::state::BudgetState;
use crate::domain::{Amounted, EntryKind};

/// Least squares line of income (y) against expense (x) over paired entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairedTrend {
    pub slope: f64,
    pub intercept: f64,
    /// Sum of the fitted income values over the paired observations.
    pub fitted_total: f64,
    pub observations: usize,
}

/// Fits income on expense, pairing the i-th income with the i-th expense.
///
/// Returns `None` when the sequences differ in length, fewer than two pairs
/// exist, or every expense amount is identical.
pub fn paired_trend(incomes: &[f64], expenses: &[f64]) -> Option<PairedTrend> {
    if incomes.len() != expenses.len() || incomes.len() < 2 {
        return None;
    }
    let n = incomes.len() as f64;
    let mean_x = expenses.iter().sum::<f64>() / n;
    let mean_y = incomes.iter().sum::<f64>() / n;

    let (covariance, variance) = expenses.iter().zip(incomes).fold(
        (0.0, 0.0),
        |(cov, var), (x, y)| {
            let dx = x - mean_x;
            (cov + dx * (y - mean_y), var + dx * dx)
        },
    );
    if variance.abs() < f64::EPSILON {
        return None;
    }

    let slope = covariance / variance;
    let intercept = mean_y - slope * mean_x;
    let fitted_total = expenses.iter().map(|x| intercept + slope * x).sum();
    Some(PairedTrend {
        slope,
        intercept,
        fitted_total,
        observations: incomes.len(),
    })
}

/// Shorthand for [`paired_trend`] returning only the summed fitted values.
pub fn paired_trend_total(incomes: &[f64], expenses: &[f64]) -> Option<f64> {
    paired_trend(incomes, expenses).map(|trend| trend.fitted_total)
}

impl BudgetState {
    /// Toy paired trend over the current entries; see the module notes.
    pub fn paired_trend(&self) -> Option<PairedTrend> {
        let amounts = |kind: EntryKind| -> Vec<f64> {
            self.entries(kind).iter().map(Amounted::amount).collect()
        };
        paired_trend(&amounts(EntryKind::Income), &amounts(EntryKind::Expense))
    }

    pub fn paired_trend_total(&self) -> Option<f64> {
        self.paired_trend().map(|trend| trend.fitted_total)
    }
}
