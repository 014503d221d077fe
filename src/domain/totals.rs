use serde::Serialize;

/// Derived totals computed on demand from the entry collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BudgetTotals {
    pub total_income: f64,
    pub total_expenses: f64,
    /// `total_income - total_expenses`; negative when expenses exceed income.
    pub net_income: f64,
}

impl BudgetTotals {
    pub fn from_sums(total_income: f64, total_expenses: f64) -> Self {
        Self {
            total_income,
            total_expenses,
            net_income: total_income - total_expenses,
        }
    }

    pub fn is_deficit(&self) -> bool {
        self.net_income < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_income_may_be_negative() {
        let totals = BudgetTotals::from_sums(500.0, 800.0);
        assert_eq!(totals.net_income, -300.0);
        assert!(totals.is_deficit());
    }

    #[test]
    fn default_is_all_zero() {
        assert_eq!(BudgetTotals::default(), BudgetTotals::from_sums(0.0, 0.0));
    }
}
