pub mod app;
pub mod client;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::employee_service::{EmployeeService, ServiceError};
pub use domain::employee::{Employee, EmployeePayload, ValidationError};
pub use storage::employees::{
    EmployeeStore, InMemoryEmployeeStore, PostgresEmployeeStore, StoreError,
};
