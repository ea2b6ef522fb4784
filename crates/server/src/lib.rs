use api_types::{Status, budget::ErrorResponse};
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{ServerState, router, run_with_listener};

mod budgets;
mod export;
mod files;
mod server;
mod summary;

pub mod types {
    pub mod budget {
        pub use api_types::budget::{BudgetEntry, BudgetSubmitted, ErrorResponse};
    }

    pub mod summary {
        pub use api_types::summary::{Summary, SummaryResponse};
    }
}

pub enum ServerError {
    Engine(EngineError),
    /// An extractor refused the request; keeps the extractor's status.
    Rejected(StatusCode, String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Validation { .. } => StatusCode::BAD_REQUEST,
        EngineError::NoData => StatusCode::NOT_FOUND,
        EngineError::StorageCorrupt { .. }
        | EngineError::Storage { .. }
        | EngineError::Serialization(_)
        | EngineError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        err @ (EngineError::Validation { .. } | EngineError::NoData) => err.to_string(),
        other => {
            tracing::error!("engine error: {other}");
            "internal server error".to_string()
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Rejected(status, err) => (status, err),
        };

        (
            status,
            Json(ErrorResponse {
                status: Status::Error,
                message,
            }),
        )
            .into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
