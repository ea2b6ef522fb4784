use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};

use std::{sync::Arc, time::Instant};

use crate::{budgets, export, files, summary};
use engine::Engine;

/// Maximum accepted request body.
const BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Number of entries returned by `/api/budgets` unless configured otherwise.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub recent_limit: usize,
}

impl ServerState {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }

    pub fn recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }
}

async fn trace_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "{method} {path} -> {} ({:?})",
        response.status(),
        started.elapsed()
    );
    response
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/submit-budget", post(budgets::submit))
        .route("/api/budgets", get(budgets::recent))
        .route("/api/summary", get(summary::get_summary))
        .route("/download/csv", get(export::download_csv))
        .route("/data/{filename}", get(files::get))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state)).await
}
