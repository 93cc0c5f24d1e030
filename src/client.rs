//! Upstream HTTP client for the NWS API
//!
//! Thin wrapper around `reqwest::Client` that centralizes the identifying
//! headers and the request timeout.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

use crate::config::WeatherConfig;
use crate::constants::{ACCEPT_GEO_JSON, USER_AGENT};
use crate::error::{FetchError, Result};

/// Shared HTTP client with the fixed NWS headers
#[derive(Clone)]
pub struct NwsClient {
    inner: Arc<Client>,
    api_base: String,
}

impl NwsClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GEO_JSON));

        let inner = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            inner: Arc::new(inner),
            api_base: config.api_base.clone(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// GET a URL and decode the body as JSON
    pub async fn fetch(&self, url: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);

        let response = self.inner.get(url).send().await?.error_for_status()?;
        let data = response.json::<Value>().await?;
        Ok(data)
    }

    /// Like [`fetch`](Self::fetch), but any failure becomes `None`
    pub async fn fetch_json(&self, url: &str) -> Option<Value> {
        match self.fetch(url).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!("Upstream request to {} failed: {}", url, e);
                None
            }
        }
    }
}
