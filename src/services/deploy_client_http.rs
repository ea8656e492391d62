//! Dokploy API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::domain::{AppError, DeployConfig};
use crate::ports::DeployClient;

const X_API_KEY: &str = "x-api-key";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the Dokploy deployment API.
#[derive(Debug, Clone)]
pub struct HttpDeployClient {
    client: Client,
}

impl HttpDeployClient {
    /// Create a client with the default request timeout.
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    application_id: &'a str,
}

impl DeployClient for HttpDeployClient {
    fn trigger_deployment(&self, config: &DeployConfig) -> Result<(), AppError> {
        let url = config.endpoint_url();

        let response = self
            .client
            .post(url.clone())
            .header(ACCEPT, "application/json")
            .header(X_API_KEY, &config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&ApiRequest { application_id: &config.application_id })
            .send()
            .map_err(|e| AppError::Transport { url: url.to_string(), details: e.to_string() })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(AppError::DeployFailed {
            application_id: config.application_id.clone(),
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            body: read_json_body(response),
        })
    }
}

/// Best-effort capture of the failure payload for reporting.
fn read_json_body(response: reqwest::blocking::Response) -> Option<serde_json::Value> {
    let text = response.text().ok()?;
    if text.is_empty() {
        return None;
    }
    serde_json::from_str(&text).ok().or(Some(serde_json::Value::String(text)))
}
