//! Derived budget metrics.

use crate::BudgetInput;

/// Values computed from a [`BudgetInput`] when an entry is created.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Metrics {
    pub needs_total: f64,
    pub wants_total: f64,
    pub total_expenses: f64,
    /// Never negative: overspending is stored as zero savings.
    pub savings: f64,
    /// Percentage of income, two decimals. Zero when there is no income.
    pub savings_rate: f64,
}

/// Compute the derived metrics of a budget.
pub fn derive(input: &BudgetInput) -> Metrics {
    let needs_total =
        input.rent + input.utilities + input.groceries + input.recharge + input.transport;
    let wants_total = input.dining + input.ott + input.shopping;
    let total_expenses = needs_total + wants_total;
    let savings = (input.income - total_expenses).max(0.0);
    let savings_rate = if input.income > 0.0 {
        round2(savings / input.income * 100.0)
    } else {
        0.0
    };

    Metrics {
        needs_total,
        wants_total,
        total_expenses,
        savings,
        savings_rate,
    }
}

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
