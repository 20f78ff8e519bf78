//! The employee service.
//!
//! Sits between the HTTP transport and the record store:
//! 1.  Validates request payloads before anything touches the store.
//! 2.  Turns "no such record" into [`ServiceError::NotFound`].
//! 3.  Passes store failures through untouched so the transport can map them.

use crate::domain::employee::{Employee, EmployeePayload, ValidationError};
use crate::storage::employees::{EmployeeStore, StoreError};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Employee not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Stateless CRUD operations over a shared store handle.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub fn is_connected(&self) -> bool {
        self.store.is_connected()
    }

    pub async fn list(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.store.list().await?)
    }

    /// Ids that do not parse are treated like ids that do not exist.
    pub async fn get(&self, id: &str) -> ServiceResult<Employee> {
        let id = parse_id(id)?;
        self.store.get(id).await?.ok_or(ServiceError::NotFound)
    }

    pub async fn create(&self, payload: &EmployeePayload) -> ServiceResult<Employee> {
        let draft = payload.validate()?;
        Ok(self.store.create(draft).await?)
    }

    /// Validation runs before the id is looked at.
    pub async fn update(&self, id: &str, payload: &EmployeePayload) -> ServiceResult<Employee> {
        let draft = payload.validate()?;
        let id = parse_id(id)?;
        self.store
            .update(id, draft)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<Employee> {
        let id = parse_id(id)?;
        self.store.delete(id).await?.ok_or(ServiceError::NotFound)
    }
}

fn parse_id(id: &str) -> ServiceResult<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| ServiceError::NotFound)
}
