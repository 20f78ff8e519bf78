//! Shared helpers: run the real router on an ephemeral port.

#![allow(dead_code)]

use async_trait::async_trait;
use employee_directory::domain::employee::{Employee, EmployeeDraft};
use employee_directory::storage::employees::StoreResult;
use employee_directory::transport;
use employee_directory::{EmployeeStore, InMemoryEmployeeStore, StoreError};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

pub struct TestServer {
    pub base_url: String,
    pub store: Option<Arc<InMemoryEmployeeStore>>,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn store(&self) -> &InMemoryEmployeeStore {
        self.store.as_deref().expect("server was started without a store")
    }
}

pub async fn spawn_server(
    store: Option<Arc<InMemoryEmployeeStore>>,
    frontend_dirs: Vec<PathBuf>,
) -> TestServer {
    let handle_store = store.clone().map(|s| s as Arc<dyn EmployeeStore>);
    let mut server = serve(handle_store, frontend_dirs).await;
    server.store = store;
    server
}

/// Server over any store; `TestServer::store()` is unavailable.
pub async fn spawn_with_store(store: Arc<dyn EmployeeStore>) -> TestServer {
    serve(Some(store), Vec::new()).await
}

async fn serve(store: Option<Arc<dyn EmployeeStore>>, frontend_dirs: Vec<PathBuf>) -> TestServer {
    let app_state = transport::http::AppState::new(store, frontend_dirs);
    let router = transport::http::create_router(app_state);

    // Bind to an ephemeral port to avoid conflicts between tests.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        store: None,
        client: reqwest::Client::new(),
        handle,
    }
}

/// Server backed by a fresh in-memory store and no frontend bundle.
pub async fn spawn_with_memory_store() -> TestServer {
    spawn_server(Some(Arc::new(InMemoryEmployeeStore::new())), Vec::new()).await
}

pub fn jane_doe() -> Value {
    json!({"name": "Jane Doe", "location": "NYC", "position": "Engineer", "salary": 90000})
}

/// A connected store whose every operation fails with a backend error.
pub struct FailingStore {
    pub message: String,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn fail<T>(&self) -> StoreResult<T> {
        Err(StoreError::Backend(self.message.clone()))
    }
}

#[async_trait]
impl EmployeeStore for FailingStore {
    fn is_connected(&self) -> bool {
        true
    }

    async fn list(&self) -> StoreResult<Vec<Employee>> {
        self.fail()
    }

    async fn get(&self, _id: Uuid) -> StoreResult<Option<Employee>> {
        self.fail()
    }

    async fn create(&self, _draft: EmployeeDraft) -> StoreResult<Employee> {
        self.fail()
    }

    async fn update(&self, _id: Uuid, _draft: EmployeeDraft) -> StoreResult<Option<Employee>> {
        self.fail()
    }

    async fn delete(&self, _id: Uuid) -> StoreResult<Option<Employee>> {
        self.fail()
    }
}
