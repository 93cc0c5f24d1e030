/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// Accept header value expected by the NWS API
pub const ACCEPT_GEO_JSON: &str = "application/geo+json";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Timeout applied to every upstream request
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Tool output text
// ============================================================================

pub const ALERTS_UNAVAILABLE: &str = "Unable to fetch alerts or no alerts found.";
pub const NO_ACTIVE_ALERTS: &str = "No active alerts for this state.";

/// Fallback for a missing event, area or severity
pub const UNKNOWN: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_INSTRUCTION: &str = "No instruction provided";
