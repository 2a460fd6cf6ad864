use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::database::models::{Company, CompanyInput};

/// Errors from client-side API calls
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// The companies API surface as seen from the client. The view depends on
/// this trait so tests can inject failures without a server.
#[async_trait]
pub trait CompanyApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Company>, ClientError>;
    async fn create(&self, input: &CompanyInput) -> Result<Company, ClientError>;
    async fn update(&self, id: &str, input: &CompanyInput) -> Result<Company, ClientError>;
    async fn delete(&self, id: &str) -> Result<(), ClientError>;
}

/// HTTP client for the companies API.
pub struct CompaniesClient {
    http: reqwest::Client,
    base_url: String,
}

impl CompaniesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe GET /health. Ok on 200, Api error otherwise.
    pub async fn health(&self) -> Result<Value, ClientError> {
        let response = self.http.get(format!("{}/health", self.base_url)).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Turn a non-2xx response into ClientError::Api, extracting the server's
/// `{error}` message when the body carries one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| status.to_string());

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl CompanyApi for CompaniesClient {
    async fn list(&self) -> Result<Vec<Company>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/companies", self.base_url))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, input: &CompanyInput) -> Result<Company, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/companies", self.base_url))
            .json(input)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &str, input: &CompanyInput) -> Result<Company, ClientError> {
        let response = self
            .http
            .put(format!("{}/api/companies/{}", self.base_url, id))
            .json(input)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/api/companies/{}", self.base_url, id))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
