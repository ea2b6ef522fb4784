//! Bounded, ordered collection of budget entries.

use crate::BudgetEntry;

/// Default number of entries kept in the history.
pub const DEFAULT_CAPACITY: usize = 100;

/// Entries in submission order, oldest first, never longer than `capacity`.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    entries: Vec<BudgetEntry>,
    capacity: usize,
}

impl History {
    /// Wrap loaded entries, dropping the oldest ones if they exceed `capacity`.
    pub fn from_entries(entries: Vec<BudgetEntry>, capacity: usize) -> Self {
        let mut history = Self { entries, capacity };
        history.trim();
        history
    }

    /// Append an entry, returning how many old entries were dropped.
    pub fn push(&mut self, entry: BudgetEntry) -> usize {
        self.entries.push(entry);
        self.trim()
    }

    /// The last `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> &[BudgetEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[BudgetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn trim(&mut self) -> usize {
        let excess = self.entries.len().saturating_sub(self.capacity);
        if excess > 0 {
            self.entries.drain(..excess);
        }
        excess
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::BudgetInput;

    fn entry(n: u32) -> BudgetEntry {
        BudgetEntry::new(at(n), BudgetInput {
            income: f64::from(n),
            ..BudgetInput::default()
        })
    }

    fn at(n: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|d| d + chrono::Duration::minutes(i64::from(n)))
            .unwrap()
    }

    #[test]
    fn push_keeps_most_recent_within_capacity() {
        let mut history = History::from_entries(vec![], 3);
        assert_eq!(history.push(entry(1)), 0);
        assert_eq!(history.push(entry(2)), 0);
        assert_eq!(history.push(entry(3)), 0);
        assert_eq!(history.push(entry(4)), 1);

        let incomes: Vec<f64> = history.entries().iter().map(|e| e.income).collect();
        assert_eq!(incomes, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn oversized_load_is_trimmed() {
        let history = History::from_entries((1..=5).map(entry).collect(), 2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].income, 4.0);
    }

    #[test]
    fn recent_returns_tail_in_order() {
        let history = History::from_entries((1..=12).map(entry).collect(), DEFAULT_CAPACITY);
        let recent: Vec<f64> = history.recent(10).iter().map(|e| e.income).collect();
        assert_eq!(recent, (3..=12).map(f64::from).collect::<Vec<_>>());
        assert_eq!(history.recent(50).len(), 12);
    }

    #[test]
    fn recent_on_empty_history() {
        let history = History::from_entries(vec![], DEFAULT_CAPACITY);
        assert!(history.is_empty());
        assert!(history.recent(10).is_empty());
    }
}
