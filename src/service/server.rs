//! HTTP front end.
//!
//! Routes:
//! - `POST /summarize`: body handled by [`SummarizeService::handle`]
//! - `GET /health`: liveness probe
//!
//! Each request runs the pipeline to completion on the worker that
//! received it.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use super::SummarizeService;

/// Build the application router.
///
/// Request bodies are unbounded; a large document only takes longer.
pub fn router(service: Arc<SummarizeService>) -> Router {
    Router::new()
        .route("/summarize", post(summarize))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::disable())
        .with_state(service)
}

async fn summarize(
    State(service): State<Arc<SummarizeService>>,
    body: Bytes,
) -> impl IntoResponse {
    let response = service.handle(&body);
    let status = StatusCode::from_u16(response.status.code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Serve on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, service: Arc<SummarizeService>) -> std::io::Result<()> {
    tracing::info!(addr = %listener.local_addr()?, "summarizer listening");
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
