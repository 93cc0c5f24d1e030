use std::time::Duration;

use crate::constants::{NWS_API_BASE, REQUEST_TIMEOUT_SECS};

/// Upstream settings for the weather service
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Base URL the tool paths are appended to, without a trailing slash
    pub api_base: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl WeatherConfig {
    /// Uses a different API base, e.g. a local mock server
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base: NWS_API_BASE.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}
