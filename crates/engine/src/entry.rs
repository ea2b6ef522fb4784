//! A single budget entry and the parsing of its submitted fields.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine, metrics};

/// Names of the numeric fields accepted from a submission, in storage order.
pub const INPUT_FIELDS: [&str; 10] = [
    "income",
    "rent",
    "utilities",
    "groceries",
    "recharge",
    "transport",
    "dining",
    "ott",
    "shopping",
    "goal_price",
];

/// The raw amounts of a monthly budget.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BudgetInput {
    pub income: f64,
    pub rent: f64,
    pub utilities: f64,
    pub groceries: f64,
    pub recharge: f64,
    pub transport: f64,
    pub dining: f64,
    pub ott: f64,
    pub shopping: f64,
    pub goal_price: f64,
}

impl BudgetInput {
    /// Build an input from submitted key/value pairs.
    ///
    /// Missing fields are `0`, unknown keys are ignored and only the first
    /// occurrence of a repeated key is considered. A field that is not a
    /// finite, non-negative number is rejected with
    /// [`EngineError::Validation`].
    pub fn from_fields<I, K, V>(fields: I) -> ResultEngine<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut values: [Option<f64>; INPUT_FIELDS.len()] = [None; INPUT_FIELDS.len()];

        for (key, value) in fields {
            let Some(idx) = INPUT_FIELDS.iter().position(|f| *f == key.as_ref()) else {
                continue;
            };
            if values[idx].is_some() {
                continue;
            }
            values[idx] = Some(parse_amount(INPUT_FIELDS[idx], value.as_ref())?);
        }

        let [
            income,
            rent,
            utilities,
            groceries,
            recharge,
            transport,
            dining,
            ott,
            shopping,
            goal_price,
        ] = values.map(|v| v.unwrap_or(0.0));

        Ok(Self {
            income,
            rent,
            utilities,
            groceries,
            recharge,
            transport,
            dining,
            ott,
            shopping,
            goal_price,
        })
    }
}

fn parse_amount(field: &'static str, raw: &str) -> ResultEngine<f64> {
    let invalid = || EngineError::Validation {
        field,
        value: raw.to_string(),
    };

    let amount: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(invalid());
    }
    Ok(amount)
}

/// A persisted budget record.
///
/// The derived fields are filled by [`BudgetEntry::new`] and never
/// recomputed afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub timestamp: NaiveDateTime,
    pub income: f64,
    pub rent: f64,
    pub utilities: f64,
    pub groceries: f64,
    pub recharge: f64,
    pub transport: f64,
    pub dining: f64,
    pub ott: f64,
    pub shopping: f64,
    pub goal_price: f64,
    pub needs_total: f64,
    pub wants_total: f64,
    pub total_expenses: f64,
    pub savings: f64,
    pub savings_rate: f64,
}

impl BudgetEntry {
    pub fn new(timestamp: NaiveDateTime, input: BudgetInput) -> Self {
        let derived = metrics::derive(&input);

        Self {
            timestamp,
            income: input.income,
            rent: input.rent,
            utilities: input.utilities,
            groceries: input.groceries,
            recharge: input.recharge,
            transport: input.transport,
            dining: input.dining,
            ott: input.ott,
            shopping: input.shopping,
            goal_price: input.goal_price,
            needs_total: derived.needs_total,
            wants_total: derived.wants_total,
            total_expenses: derived.total_expenses,
            savings: derived.savings,
            savings_rate: derived.savings_rate,
        }
    }
}
