use crate::transport::http::types::{ApiError, AppState};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::time::Instant;

/// Rejects every `/api` request with 503 while the store is unreachable.
///
/// Checked once per request against the store's connectivity flag. No retry.
pub async fn require_store(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.connected_service().is_none() {
        log::warn!(
            "{} {} rejected: database not connected",
            request.method(),
            request.uri().path()
        );
        return ApiError::Unavailable.into_response();
    }
    next.run(request).await
}

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(request).await;
    log::info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}
