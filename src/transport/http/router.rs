use crate::domain::employee::{Employee, EmployeePayload};
use crate::transport::http::handlers::{employees, frontend, health};
use crate::transport::http::middleware::{log_requests, require_store};
use crate::transport::http::types::{AppState, DeleteResponse, ErrorResponse, HealthResponse};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        employees::list_employees_handler,
        employees::get_employee_handler,
        employees::create_employee_handler,
        employees::update_employee_handler,
        employees::delete_employee_handler
    ),
    components(schemas(
        Employee,
        EmployeePayload,
        DeleteResponse,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

/// Routes under `/api`. The gate wraps the fallback too, so unknown `/api`
/// paths also get a 503 while the store is down.
fn api_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/employeelist",
            get(employees::list_employees_handler).post(employees::create_employee_handler),
        )
        .route(
            "/employeelist/:id",
            get(employees::get_employee_handler)
                .put(employees::update_employee_handler)
                .delete(employees::delete_employee_handler),
        )
        .fallback(employees::api_not_found_handler)
        .layer(from_fn_with_state(app_state, require_store))
}

pub fn create_router(app_state: AppState) -> Router {
    let static_files = frontend::static_files(&app_state.frontend_dirs);
    Router::new()
        .route("/", get(frontend::index_handler))
        .route("/health", get(health::healthcheck_handler))
        .nest("/api", api_routes(app_state.clone()))
        .fallback_service(static_files)
        .layer(from_fn(log_requests))
        .with_state(app_state)
}
