use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// National Weather Service API Models
// ============================================================================

/// The `features` member of an `/alerts/active/area/{area}` body
#[derive(Debug)]
pub enum AlertFeatures {
    /// Body is not an object or has no `features` key
    Missing,
    /// `features` is `null` or an empty array
    Empty,
    Present(Vec<AlertFeature>),
}

impl AlertFeatures {
    pub fn from_body(body: &Value) -> Self {
        match body.get("features") {
            None => AlertFeatures::Missing,
            Some(Value::Null) => AlertFeatures::Empty,
            Some(Value::Array(items)) if items.is_empty() => AlertFeatures::Empty,
            Some(Value::Array(items)) => {
                AlertFeatures::Present(items.iter().map(AlertFeature::from_value).collect())
            }
            Some(other) => {
                tracing::warn!("Alert features is not an array: {}", other);
                AlertFeatures::Missing
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertFeature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: AlertProperties,
}

impl AlertFeature {
    /// Reads one feature; anything unreadable formats from fallbacks
    pub fn from_value(value: &Value) -> Self {
        AlertFeature::deserialize(value).unwrap_or_else(|e| {
            tracing::warn!("Unreadable alert feature: {}", e);
            AlertFeature::default()
        })
    }
}

/// Alert fields used for display
///
/// `null` reads the same as absent; numbers, booleans and nested values are
/// kept as their JSON text.
#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    #[serde(default, deserialize_with = "lenient_text")]
    pub event: Option<String>,
    #[serde(rename = "areaDesc", default, deserialize_with = "lenient_text")]
    pub area_desc: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub instruction: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state or area code (e.g. "CA", "NY")
    pub location: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// NWS point identifier, "latitude,longitude" (e.g. "39.7456,-97.0892")
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn present(body: Value) -> Vec<AlertFeature> {
        match AlertFeatures::from_body(&body) {
            AlertFeatures::Present(features) => features,
            other => panic!("expected features, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_features() {
        assert!(matches!(
            AlertFeatures::from_body(&json!({"title": "Current watches"})),
            AlertFeatures::Missing
        ));
        assert!(matches!(AlertFeatures::from_body(&json!([])), AlertFeatures::Missing));
        assert!(matches!(AlertFeatures::from_body(&json!("x")), AlertFeatures::Missing));
        assert!(matches!(
            AlertFeatures::from_body(&json!({"features": "x"})),
            AlertFeatures::Missing
        ));
    }

    #[test]
    fn test_null_or_empty_features() {
        assert!(matches!(
            AlertFeatures::from_body(&json!({"features": null})),
            AlertFeatures::Empty
        ));
        assert!(matches!(
            AlertFeatures::from_body(&json!({"features": []})),
            AlertFeatures::Empty
        ));
    }

    #[test]
    fn test_null_and_missing_properties() {
        let features = present(json!({
            "features": [
                {"properties": {"event": "Flood Watch", "instruction": null}},
                {"id": "no-properties"},
                {"properties": null}
            ]
        }));

        assert_eq!(features.len(), 3);
        assert_eq!(features[0].properties.event.as_deref(), Some("Flood Watch"));
        assert!(features[0].properties.instruction.is_none());
        assert!(features[1].properties.event.is_none());
        assert!(features[2].properties.event.is_none());
    }

    #[test]
    fn test_non_string_properties_keep_json_text() {
        let features = present(json!({
            "features": [{"properties": {"severity": 3, "event": true, "areaDesc": ["A", "B"]}}]
        }));
        let props = &features[0].properties;

        assert_eq!(props.severity.as_deref(), Some("3"));
        assert_eq!(props.event.as_deref(), Some("true"));
        assert_eq!(props.area_desc.as_deref(), Some(r#"["A","B"]"#));
    }

    #[test]
    fn test_unreadable_feature_uses_fallbacks() {
        let features = present(json!({"features": ["oops", {"properties": "oops"}]}));

        assert_eq!(features.len(), 2);
        assert!(features[0].properties.event.is_none());
        assert!(features[1].properties.event.is_none());
    }

    #[test]
    fn test_area_desc_rename() {
        let props: AlertProperties =
            serde_json::from_value(json!({"areaDesc": "Marin; Sonoma"})).unwrap();
        assert_eq!(props.area_desc.as_deref(), Some("Marin; Sonoma"));
    }
}
