//! Jikan v4 client over reqwest

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde_json::Value;

use super::AnimeApi;
use crate::config::ApiConfig;
use crate::error::{AnidexError, ApiError, ConfigError, Result};
use crate::types::Envelope;

/// Client for the public Jikan REST API
#[derive(Debug, Clone)]
pub struct JikanClient {
    http: reqwest::Client,
    base_url: String,
}

impl JikanClient {
    /// Build a client from the `[api]` config section
    ///
    /// # Errors
    ///
    /// Returns a config error for an unparsable timeout or user agent, or an
    /// API error if the TLS backend cannot be initialised.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let timeout = config.timeout()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
            AnidexError::Config(ConfigError::InvalidValue {
                field: "api.user_agent".to_string(),
                reason: e.to_string(),
            })
        })?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path relative to the base URL
    pub fn url_for(&self, path: &str) -> std::result::Result<reqwest::Url, ApiError> {
        let joined = format!("{}{}", self.base_url, path);
        reqwest::Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", joined, e)))
    }
}

/// Parse a response body and return the `data` array
pub fn parse_envelope(body: &[u8]) -> std::result::Result<Vec<Value>, ApiError> {
    let envelope: Envelope<Vec<Value>> = serde_json::from_slice(body)?;
    Ok(envelope.data)
}

#[async_trait]
impl AnimeApi for JikanClient {
    async fn fetch_json(&self, path: &str) -> std::result::Result<Vec<Value>, ApiError> {
        let url = self.url_for(path)?;
        tracing::debug!(%url, "GET");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let data = parse_envelope(&body)?;
        tracing::debug!(%url, records = data.len(), "Response decoded");
        Ok(data)
    }
}
