use crate::app::employee_service::EmployeeService;
use crate::domain::employee::EmployeePayload;
use crate::transport::http::types::{ApiError, AppState, DeleteResponse, DELETED_MESSAGE};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// The gate middleware already rejected disconnected stores; this covers
/// handlers mounted without it.
fn service(state: &AppState) -> Result<&EmployeeService, ApiError> {
    state.connected_service().ok_or(ApiError::Unavailable)
}

#[utoipa::path(
    get,
    path = "/api/employeelist",
    responses(
        (status = 200, description = "All employees in creation order", body = Vec<Employee>),
        (status = 503, description = "Database not connected", body = ErrorResponse)
    )
)]
pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let employees = service(&state)?.list().await?;
    Ok((StatusCode::OK, Json(employees)))
}

#[utoipa::path(
    get,
    path = "/api/employeelist/{id}",
    params(
        ("id" = String, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "The employee", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Lookup failed", body = ErrorResponse),
        (status = 503, description = "Database not connected", body = ErrorResponse)
    )
)]
pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = service(&state)?.get(&id).await?;
    Ok((StatusCode::OK, Json(employee)))
}

#[utoipa::path(
    post,
    path = "/api/employeelist",
    request_body = EmployeePayload,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 500, description = "Write failed", body = ErrorResponse),
        (status = 503, description = "Database not connected", body = ErrorResponse)
    )
)]
pub async fn create_employee_handler(
    State(state): State<AppState>,
    request: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let service = service(&state)?;
    let Json(payload) = request?;
    let employee = service.create(&payload).await?;
    log::info!("created employee {}", employee.id);
    Ok((StatusCode::CREATED, Json(employee)))
}

#[utoipa::path(
    put,
    path = "/api/employeelist/{id}",
    params(
        ("id" = String, Path, description = "Employee id")
    ),
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Write failed", body = ErrorResponse),
        (status = 503, description = "Database not connected", body = ErrorResponse)
    )
)]
pub async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let service = service(&state)?;
    let Json(payload) = request?;
    let employee = service.update(&id, &payload).await?;
    log::info!("updated employee {}", employee.id);
    Ok((StatusCode::OK, Json(employee)))
}

#[utoipa::path(
    delete,
    path = "/api/employeelist/{id}",
    params(
        ("id" = String, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = DeleteResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Delete failed", body = ErrorResponse),
        (status = 503, description = "Database not connected", body = ErrorResponse)
    )
)]
pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = service(&state)?.delete(&id).await?;
    log::info!("deleted employee {}", employee.id);
    Ok((
        StatusCode::OK,
        Json(DeleteResponse {
            message: DELETED_MESSAGE.to_string(),
            employee,
        }),
    ))
}

/// Unknown paths under `/api`.
pub async fn api_not_found_handler() -> ApiError {
    ApiError::RouteNotFound
}
