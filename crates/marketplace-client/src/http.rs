//! reqwest-backed transport.

use crate::error::TransportError;
use crate::traits::{Transport, WriteMethod};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Identifying client header sent with every request.
pub const USER_AGENT: &str = "mpc/0.0.0";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2500);

/// Connection settings for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog API (e.g. `http://localhost:8090`)
    pub server: String,
    /// Per-request timeout; a timed out request fails on its own
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP implementation of [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(TransportError::Build)?;

        Ok(Self {
            client,
            base_url: config.server.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Fail on non-2xx and return the raw body.
    async fn checked_body(path: &str, response: Response) -> Result<Vec<u8>, TransportError> {
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Request {
                path: path.to_string(),
                source,
            })?;
        Ok(body.to_vec())
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn create(
        &self,
        method: WriteMethod,
        path: &str,
        payload: &Value,
    ) -> Result<Value, TransportError> {
        let url = self.url(path);
        debug!("{method} {url}");

        let request = match method {
            WriteMethod::Put => self.client.put(&url),
            WriteMethod::Post => self.client.post(&url),
        };
        let response = request
            .json(payload)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                path: path.to_string(),
                source,
            })?;

        let body = Self::checked_body(path, response).await?;
        // Confirmation bodies are optional; anything unparseable means "none"
        Ok(serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    async fn read(&self, path: &str) -> Result<Vec<Value>, TransportError> {
        let url = self.url(path);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                path: path.to_string(),
                source,
            })?;

        let body = Self::checked_body(path, response).await?;
        match serde_json::from_slice::<Value>(&body) {
            Ok(Value::Array(items)) => Ok(items),
            Ok(other) => Err(TransportError::Decode {
                path: path.to_string(),
                message: format!("expected a JSON array, got {}", json_kind(&other)),
            }),
            Err(e) => Err(TransportError::Decode {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
