//! In-process employee store.

use super::{EmployeeStore, StoreError, StoreResult};
use crate::domain::employee::{Employee, EmployeeDraft};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Insertion-ordered store kept in memory.
///
/// The connectivity flag can be flipped with [`InMemoryEmployeeStore::set_connected`]
/// to simulate an outage.
#[derive(Debug)]
pub struct InMemoryEmployeeStore {
    records: RwLock<Vec<Employee>>,
    connected: AtomicBool,
    calls: AtomicUsize,
}

impl Default for InMemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            connected: AtomicBool::new(true),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Number of data operations that reached this store.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.is_connected() {
            Ok(())
        } else {
            Err(StoreError::Unavailable)
        }
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn list(&self) -> StoreResult<Vec<Employee>> {
        self.enter()?;
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> StoreResult<Option<Employee>> {
        self.enter()?;
        let records = self.records.read().await;
        Ok(records.iter().find(|e| e.id == id).cloned())
    }

    async fn create(&self, draft: EmployeeDraft) -> StoreResult<Employee> {
        self.enter()?;
        let employee = Employee::from_draft(draft);
        self.records.write().await.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: Uuid, draft: EmployeeDraft) -> StoreResult<Option<Employee>> {
        self.enter()?;
        let mut records = self.records.write().await;
        Ok(records.iter_mut().find(|e| e.id == id).map(|e| {
            e.apply(draft);
            e.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<Option<Employee>> {
        self.enter()?;
        let mut records = self.records.write().await;
        Ok(records
            .iter()
            .position(|e| e.id == id)
            .map(|idx| records.remove(idx)))
    }
}
