//! Record store for `Employee` documents.

use crate::domain::employee::{Employee, EmployeeDraft};
use async_trait::async_trait;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryEmployeeStore;
pub use postgres::PostgresEmployeeStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database not connected")]
    Unavailable,
    #[error("{0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_) | sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
                StoreError::Unavailable
            }
            other => StoreError::Backend(other.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Contract every employee store implements.
///
/// Lookups by an unknown id return `Ok(None)`; `Err` is reserved for
/// connectivity and backend failures.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Last known connectivity. Cheap; never issues a query.
    fn is_connected(&self) -> bool;

    /// All records in creation order.
    async fn list(&self) -> StoreResult<Vec<Employee>>;

    async fn get(&self, id: Uuid) -> StoreResult<Option<Employee>>;

    /// Persists a new record, assigning `id` and `created_at`.
    async fn create(&self, draft: EmployeeDraft) -> StoreResult<Employee>;

    /// Replaces all four fields of an existing record.
    async fn update(&self, id: Uuid, draft: EmployeeDraft) -> StoreResult<Option<Employee>>;

    /// Hard delete. Returns the removed record.
    async fn delete(&self, id: Uuid) -> StoreResult<Option<Employee>>;
}
