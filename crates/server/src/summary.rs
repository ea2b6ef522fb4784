//! Summary API endpoint

use api_types::summary::{Summary, SummaryResponse};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle requests for the history summary
pub async fn get_summary(
    State(state): State<ServerState>,
) -> Result<Json<SummaryResponse>, ServerError> {
    let response = match state.engine.summary().await? {
        Some(summary) => SummaryResponse::Summary(Summary {
            total_entries: summary.total_entries,
            avg_income: summary.avg_income,
            avg_savings: summary.avg_savings,
            avg_savings_rate: summary.avg_savings_rate,
            best_month: summary.best_month,
        }),
        None => SummaryResponse::Empty {
            message: "No data available".to_string(),
        },
    };

    Ok(Json(response))
}
