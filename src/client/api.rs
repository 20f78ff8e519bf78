//! HTTP client for the employee API.

use crate::domain::employee::{Employee, EmployeePayload};
use crate::transport::http::types::DeleteResponse;
use async_trait::async_trait;
use reqwest::StatusCode;
use uuid::Uuid;

const COLLECTION_PATH: &str = "/api/employeelist";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded {status}: {body}")]
    Status { status: StatusCode, body: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// The five employee endpoints as seen from a client.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Employee>>;
    async fn get(&self, id: Uuid) -> ClientResult<Employee>;
    async fn create(&self, payload: &EmployeePayload) -> ClientResult<Employee>;
    async fn update(&self, id: Uuid, payload: &EmployeePayload) -> ClientResult<Employee>;
    async fn delete(&self, id: Uuid) -> ClientResult<Employee>;
}

#[derive(Clone)]
pub struct HttpEmployeeApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEmployeeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, COLLECTION_PATH)
    }

    fn item_url(&self, id: Uuid) -> String {
        format!("{}{}/{}", self.base_url, COLLECTION_PATH, id)
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status { status, body });
    }
    Ok(response.json::<T>().await?)
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list(&self) -> ClientResult<Vec<Employee>> {
        decode(self.client.get(self.collection_url()).send().await?).await
    }

    async fn get(&self, id: Uuid) -> ClientResult<Employee> {
        decode(self.client.get(self.item_url(id)).send().await?).await
    }

    async fn create(&self, payload: &EmployeePayload) -> ClientResult<Employee> {
        let response = self
            .client
            .post(self.collection_url())
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    async fn update(&self, id: Uuid, payload: &EmployeePayload) -> ClientResult<Employee> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete(&self, id: Uuid) -> ClientResult<Employee> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        let deleted: DeleteResponse = decode(response).await?;
        Ok(deleted.employee)
    }
}
