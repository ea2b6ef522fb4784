//! Raw access to the files of the data directory

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::server::ServerState;

fn content_type(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("json") => "application/json",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}

/// Serve `filename` from the data directory
pub async fn get(State(state): State<ServerState>, Path(filename): Path<String>) -> Response {
    let Some(path) = state.engine.data_file(&filename) else {
        tracing::warn!("rejected data file request for {filename:?}");
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return StatusCode::NOT_FOUND.into_response(),
    }

    match tokio::fs::read(&path).await {
        Ok(data) => ([(header::CONTENT_TYPE, content_type(&filename))], data).into_response(),
        Err(err) => {
            tracing::error!("failed to read {}: {err}", path.display());
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
