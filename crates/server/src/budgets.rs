//! Budget submission and listing endpoints

use api_types::{
    Status,
    budget::{BudgetEntry, BudgetSubmitted},
};
use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};

use crate::{ServerError, server::ServerState};

fn map_entry(entry: engine::BudgetEntry) -> BudgetEntry {
    BudgetEntry {
        timestamp: entry.timestamp,
        income: entry.income,
        rent: entry.rent,
        utilities: entry.utilities,
        groceries: entry.groceries,
        recharge: entry.recharge,
        transport: entry.transport,
        dining: entry.dining,
        ott: entry.ott,
        shopping: entry.shopping,
        goal_price: entry.goal_price,
        needs_total: entry.needs_total,
        wants_total: entry.wants_total,
        total_expenses: entry.total_expenses,
        savings: entry.savings,
        savings_rate: entry.savings_rate,
    }
}

/// Handle a form-encoded budget submission
pub async fn submit(
    State(state): State<ServerState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Json<BudgetSubmitted>, ServerError> {
    let Form(fields) =
        form.map_err(|rejection| ServerError::Rejected(rejection.status(), rejection.body_text()))?;

    let submitted = state.engine.submit(fields).await?;

    Ok(Json(BudgetSubmitted {
        status: Status::Success,
        message: "Budget saved successfully!".to_string(),
        data: map_entry(submitted.entry),
        total_entries: submitted.total_entries,
    }))
}

/// Handle requests for the most recent entries
pub async fn recent(
    State(state): State<ServerState>,
) -> Result<Json<Vec<BudgetEntry>>, ServerError> {
    let entries = state.engine.recent(state.recent_limit).await?;

    Ok(Json(entries.into_iter().map(map_entry).collect()))
}
