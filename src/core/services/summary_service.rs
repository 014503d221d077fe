//! Aggregation helpers feeding tables, charts, and exports.

use serde::Serialize;

use crate::core::state::BudgetState;
use crate::domain::{Amounted, BudgetTotals, EntryKind, Labelled, Multiplier};

/// One labelled value in a chart dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub amount: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Every derived figure plus the datasets the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetReport {
    pub totals: BudgetTotals,
    pub multiplier: Multiplier,
    pub expected_income: f64,
    pub incomes: Vec<ChartPoint>,
    pub expenses: Vec<ChartPoint>,
    pub budget_chart: Vec<ChartPoint>,
    /// Toy paired-trend figure; `None` when the entries cannot be paired.
    pub paired_trend_total: Option<f64>,
}

/// Read-only summaries over a [`BudgetState`].
///
/// See also: [`BudgetState::totals`] for the underlying computation.
pub struct SummaryService;

impl SummaryService {
    pub const INCOME_LABEL: &'static str = "Income";
    pub const EXPENSES_LABEL: &'static str = "Expenses";
    pub const EXPECTED_INCOME_LABEL: &'static str = "Expected Income";
    pub const NET_INCOME_LABEL: &'static str = "Net Income";

    pub fn current_totals(state: &BudgetState) -> BudgetTotals {
        state.totals()
    }

    /// Builds the full report at the session's selected multiplier.
    pub fn report(state: &BudgetState) -> BudgetReport {
        let to_points = |kind: EntryKind| -> Vec<ChartPoint> {
            state
                .breakdown(kind)
                .into_iter()
                .map(|(label, amount)| ChartPoint { label, amount })
                .collect()
        };
        BudgetReport {
            totals: state.totals(),
            multiplier: state.multiplier(),
            expected_income: state.expected_income(),
            incomes: to_points(EntryKind::Income),
            expenses: to_points(EntryKind::Expense),
            budget_chart: Self::budget_chart(state),
            paired_trend_total: state.paired_trend_total(),
        }
    }

    /// Bar dataset in display order: income, expenses, expected, net.
    pub fn budget_chart(state: &BudgetState) -> Vec<ChartPoint> {
        let totals = state.totals();
        vec![
            ChartPoint::new(Self::INCOME_LABEL, totals.total_income),
            ChartPoint::new(Self::EXPENSES_LABEL, totals.total_expenses),
            ChartPoint::new(Self::EXPECTED_INCOME_LABEL, state.expected_income()),
            ChartPoint::new(Self::NET_INCOME_LABEL, totals.net_income),
        ]
    }

    /// Pie dataset that merges entries sharing an identical label.
    ///
    /// Groups keep the position of the first entry carrying their label.
    pub fn grouped_breakdown(state: &BudgetState, kind: EntryKind) -> Vec<ChartPoint> {
        let mut groups: Vec<ChartPoint> = Vec::new();
        for entry in state.entries(kind) {
            match groups.iter_mut().find(|point| point.label == entry.label()) {
                Some(point) => point.amount += entry.amount(),
                None => groups.push(ChartPoint::new(entry.label(), entry.amount())),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> BudgetState {
        let mut state = BudgetState::new();
        state.add_income("Salary", 3000.0).unwrap();
        state.add_expense("Rent", 1000.0).unwrap();
        state.add_expense("Food", 300.0).unwrap();
        state.add_expense("Rent", 200.0).unwrap();
        state
    }

    #[test]
    fn budget_chart_keeps_display_order() {
        let chart = SummaryService::budget_chart(&sample_state());
        let labels: Vec<_> = chart.iter().map(|point| point.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Income", "Expenses", "Expected Income", "Net Income"]
        );
        assert_eq!(chart[1].amount, 1500.0);
        assert_eq!(chart[2].amount, 2250.0);
        assert_eq!(chart[3].amount, 1500.0);
    }

    #[test]
    fn grouped_breakdown_merges_labels_in_first_seen_order() {
        let grouped = SummaryService::grouped_breakdown(&sample_state(), EntryKind::Expense);
        assert_eq!(
            grouped,
            vec![ChartPoint::new("Rent", 1200.0), ChartPoint::new("Food", 300.0)]
        );
    }

    #[test]
    fn report_leaves_raw_breakdown_ungrouped() {
        let report = SummaryService::report(&sample_state());
        assert_eq!(report.expenses.len(), 3);
        assert_eq!(report.totals.total_expenses, 1500.0);
        assert_eq!(report.expected_income, 2250.0);
        assert_eq!(report.multiplier, Multiplier::default());
        assert_eq!(report.paired_trend_total, None);
    }

    #[test]
    fn report_carries_paired_trend_when_entries_pair_up() {
        let mut state = BudgetState::new();
        state.add_income("Salary", 3.0).unwrap();
        state.add_income("Side", 5.0).unwrap();
        state.add_expense("Rent", 1.0).unwrap();
        state.add_expense("Food", 2.0).unwrap();
        let total = SummaryService::report(&state).paired_trend_total.unwrap();
        assert!((total - 8.0).abs() < 1e-9);
    }

    #[test]
    fn current_totals_matches_state() {
        let state = sample_state();
        assert_eq!(SummaryService::current_totals(&state), state.totals());
    }
}
