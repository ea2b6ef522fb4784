//! Aggregate statistics over the stored history.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{BudgetEntry, metrics::round2};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_entries: usize,
    pub avg_income: f64,
    pub avg_savings: f64,
    pub avg_savings_rate: f64,
    /// Timestamp of the entry with the highest savings rate.
    pub best_month: NaiveDateTime,
}

/// Summarize `entries`, or `None` when there is nothing to summarize.
///
/// Averages are rounded to two decimals. On ties for the best savings rate
/// the earliest entry wins.
pub fn summarize(entries: &[BudgetEntry]) -> Option<Summary> {
    let first = entries.first()?;
    let count = entries.len() as f64;

    let mut income = 0.0;
    let mut savings = 0.0;
    let mut savings_rate = 0.0;
    let mut best = first;
    for entry in entries {
        income += entry.income;
        savings += entry.savings;
        savings_rate += entry.savings_rate;
        if entry.savings_rate > best.savings_rate {
            best = entry;
        }
    }

    Some(Summary {
        total_entries: entries.len(),
        avg_income: round2(income / count),
        avg_savings: round2(savings / count),
        avg_savings_rate: round2(savings_rate / count),
        best_month: best.timestamp,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::BudgetInput;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    fn entry(day: u32, income: f64, expenses: f64) -> BudgetEntry {
        BudgetEntry::new(at(day), BudgetInput {
            income,
            rent: expenses,
            ..BudgetInput::default()
        })
    }

    #[test]
    fn empty_history_has_no_summary() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn averages_over_fixture() {
        let entries = [
            entry(1, 1000.0, 900.0),
            entry(2, 2000.0, 1700.0),
            entry(3, 3000.0, 2500.0),
        ];
        let summary = summarize(&entries).unwrap();
        assert_eq!(summary.total_entries, 3);
        assert_eq!(summary.avg_income, 2000.0);
        assert_eq!(summary.avg_savings, 300.0);
        // Rates are 10, 15 and 16.67.
        assert_eq!(summary.avg_savings_rate, 13.89);
        assert_eq!(summary.best_month, at(3));
    }

    #[test]
    fn best_month_tie_reports_earliest() {
        let entries = [
            entry(1, 1000.0, 800.0),
            entry(2, 500.0, 400.0),
            entry(3, 1000.0, 900.0),
        ];
        let summary = summarize(&entries).unwrap();
        assert_eq!(summary.best_month, at(1));
    }

    #[test]
    fn averages_are_rounded() {
        let entries = [entry(1, 100.0, 0.0), entry(2, 0.0, 0.0), entry(3, 0.0, 0.0)];
        let summary = summarize(&entries).unwrap();
        assert_eq!(summary.avg_income, 33.33);
        assert_eq!(summary.avg_savings, 33.33);
        assert_eq!(summary.avg_savings_rate, 33.33);
    }
}
