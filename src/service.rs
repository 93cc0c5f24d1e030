use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde_json::Value;

use crate::client::NwsClient;
use crate::config::WeatherConfig;
use crate::constants::{ALERTS_UNAVAILABLE, NO_ACTIVE_ALERTS};
use crate::formatters::format_alerts;
use crate::models::{AlertFeatures, GetAlertsRequest, GetForecastRequest};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: NwsClient,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a service talking to the public NWS API
    pub fn new() -> Result<Self> {
        Self::with_config(WeatherConfig::default())
    }

    pub fn with_config(config: WeatherConfig) -> Result<Self> {
        let client = NwsClient::new(&config)?;

        Ok(Self {
            client,
            tool_router: Self::tool_router(),
        })
    }

    /// Active alerts for an area as display text
    pub async fn alerts(&self, location: &str) -> String {
        let url = format!("{}/alerts/active/area/{}", self.client.api_base(), location);

        let Some(data) = self.client.fetch_json(&url).await else {
            return ALERTS_UNAVAILABLE.to_string();
        };

        match AlertFeatures::from_body(&data) {
            AlertFeatures::Missing => ALERTS_UNAVAILABLE.to_string(),
            AlertFeatures::Empty => NO_ACTIVE_ALERTS.to_string(),
            AlertFeatures::Present(features) => format_alerts(&features),
        }
    }

    /// Raw forecast JSON for a point, `None` if the upstream call failed
    pub async fn forecast(&self, location: &str) -> Option<Value> {
        let url = format!("{}/points/{}/forecast", self.client.api_base(), location);
        self.client.fetch_json(&url).await
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nws-weather-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather alerts and forecasts from the National Weather Service API. \
                Use get_alerts with a two-letter state code and get_forecast with a \
                'latitude,longitude' point."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get the active weather alerts for a US state. Provide a two-letter state code (e.g. 'CA', 'NY').")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for location: {}", request.location);

        let text = self.alerts(&request.location).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets the raw NWS forecast for a point
    #[tool(description = "Get the forecast for a given location. Provide an NWS point as 'latitude,longitude' (e.g. '39.7456,-97.0892').")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting forecast for location: {}", request.location);

        let forecast = self.forecast(&request.location).await.unwrap_or(Value::Null);

        Ok(CallToolResult::success(vec![Content::json(forecast)?]))
    }
}
