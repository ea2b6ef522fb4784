//! CSV download endpoint

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use engine::{EXPORT_FILE, EngineError};

use crate::{ServerError, server::ServerState};

/// Handle requests for the CSV export of the whole history
pub async fn download_csv(State(state): State<ServerState>) -> Result<Response, ServerError> {
    let data = match state.engine.write_export().await {
        Ok(data) => data,
        Err(EngineError::NoData) => {
            return Ok((StatusCode::NOT_FOUND, "No data available").into_response());
        }
        Err(err) => return Err(err.into()),
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE}\""),
            ),
        ],
        data,
    )
        .into_response())
}
