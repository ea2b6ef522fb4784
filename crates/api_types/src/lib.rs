use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Outcome tag carried by submission responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

pub mod budget {
    use super::*;

    /// A stored budget entry as exposed over HTTP.
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

    /// Response of `POST /submit-budget`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetSubmitted {
        pub status: Status,
        pub message: String,
        pub data: BudgetEntry,
        /// History length after the submission.
        pub total_entries: usize,
    }

    /// Body of every failed request.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ErrorResponse {
        pub status: Status,
        pub message: String,
    }
}

pub mod summary {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Summary {
        pub total_entries: usize,
        pub avg_income: f64,
        pub avg_savings: f64,
        pub avg_savings_rate: f64,
        pub best_month: NaiveDateTime,
    }

    /// Response of `GET /api/summary`.
    ///
    /// An empty history is not an error: it is reported as
    /// `{"message": "No data available"}`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum SummaryResponse {
        Summary(Summary),
        Empty { message: String },
    }
}
