use crate::app::employee_service::{EmployeeService, ServiceError};
use crate::domain::employee::Employee;
use crate::storage::employees::{EmployeeStore, StoreError};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use utoipa::ToSchema;

pub const DB_NOT_CONNECTED: &str = "Database not connected";
pub const DB_NOT_CONNECTED_HINT: &str = "Please check your database connection and try again";
pub const DELETED_MESSAGE: &str = "Employee deleted successfully";

#[derive(Clone)]
pub struct AppState {
    /// `None` when no store is configured or the startup connection failed.
    pub employees: Option<EmployeeService>,
    /// Frontend bundle directories, in priority order.
    pub frontend_dirs: Arc<Vec<PathBuf>>,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn EmployeeStore>>, frontend_dirs: Vec<PathBuf>) -> Self {
        Self {
            employees: store.map(EmployeeService::new),
            frontend_dirs: Arc::new(frontend_dirs),
        }
    }

    /// The service, but only while its store reports a live connection.
    pub fn connected_service(&self) -> Option<&EmployeeService> {
        self.employees.as_ref().filter(|s| s.is_connected())
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "Employee deleted successfully")]
    pub message: String,
    pub employee: Employee,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

/// Failures of the `/api` handlers, each mapped to one status code.
#[derive(Debug)]
pub enum ApiError {
    Unavailable,
    BadRequest(String),
    NotFound,
    RouteNotFound,
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => ApiError::BadRequest(e.to_string()),
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::Store(StoreError::Unavailable) => ApiError::Unavailable,
            ServiceError::Store(StoreError::Backend(msg)) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid JSON body: {}", err.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(msg) = &self {
            log::error!("store failure: {}", msg);
        }
        let body = match self {
            ApiError::Unavailable => ErrorResponse {
                error: DB_NOT_CONNECTED.to_string(),
                message: Some(DB_NOT_CONNECTED_HINT.to_string()),
            },
            ApiError::BadRequest(error) | ApiError::Internal(error) => ErrorResponse {
                error,
                message: None,
            },
            ApiError::NotFound => ErrorResponse {
                error: "Employee not found".to_string(),
                message: None,
            },
            ApiError::RouteNotFound => ErrorResponse {
                error: "Not found".to_string(),
                message: None,
            },
        };
        (status, Json(body)).into_response()
    }
}
