//! Root page and static bundle serving.

use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use std::path::PathBuf;
use tower_http::services::ServeDir;

pub const PLACEHOLDER_PAGE: &str = "<h1>Welcome to Employee Management System</h1>\
<p>Please build the frontend or start the client.</p>";

/// Serves the first bundle `index.html` that exists, otherwise a placeholder.
pub async fn index_handler(State(state): State<AppState>) -> Response {
    for dir in state.frontend_dirs.iter() {
        let index = dir.join("index.html");
        match tokio::fs::read_to_string(&index).await {
            Ok(html) => return Html(html).into_response(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => {
                log::warn!("failed to read {}: {}", index.display(), e);
            }
        }
    }
    (StatusCode::OK, Html(PLACEHOLDER_PAGE)).into_response()
}

/// Router that serves files from each bundle directory in turn.
pub fn static_files(dirs: &[PathBuf]) -> Router {
    let mut router = Router::new();
    for dir in dirs.iter().rev() {
        router = Router::new().fallback_service(ServeDir::new(dir).fallback(router));
    }
    router
}
