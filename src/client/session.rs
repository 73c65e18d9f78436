//! reqwest-backed API session

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde_json::{Map, Value};

use super::Transport;
use crate::config::Config;
use crate::error::{ApiError, Result};

/// AdWire API base URL
const API_BASE_URL: &str = "https://api.adwire.io/v1";

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An authenticated connection to the platform API.
///
/// The session owns the HTTP client and maps response status classes onto
/// [`ApiError`]. It deliberately carries no retry, rate-limiting, or
/// pagination behavior.
pub struct Session {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl Session {
    /// Create a session against the default API base URL.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_base_url(API_BASE_URL, api_key)
    }

    /// Create a session against a specific base URL (staging, tests).
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Create a session from a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate_auth()?;
        match &config.base_url {
            Some(base_url) => Self::with_base_url(base_url.clone(), config.api_key.clone()),
            None => Self::new(config.api_key.clone()),
        }
    }

    /// The base URL this session talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Map<String, Value>>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(api_key) = &self.api_key {
            request = request.header("X-ApiKey", api_key);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        match status {
            status if status.is_success() => {
                let data = response.json::<Value>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(retry_after).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl Transport for Session {
    async fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Map<String, Value>) -> Result<Value> {
        self.request(Method::POST, path, Some(body)).await
    }
}
