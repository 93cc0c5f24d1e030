use crate::constants::{NO_DESCRIPTION, NO_INSTRUCTION, UNKNOWN};
use crate::models::{AlertFeature, AlertProperties};

/// Formats one alert as a five-line block
pub fn format_alert(props: &AlertProperties) -> String {
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
        props.event.as_deref().unwrap_or(UNKNOWN),
        props.area_desc.as_deref().unwrap_or(UNKNOWN),
        props.severity.as_deref().unwrap_or(UNKNOWN),
        props.description.as_deref().unwrap_or(NO_DESCRIPTION),
        props.instruction.as_deref().unwrap_or(NO_INSTRUCTION),
    )
}

/// Formats alerts into blocks separated by a blank line
pub fn format_alerts(features: &[AlertFeature]) -> String {
    features
        .iter()
        .map(|feature| format_alert(&feature.properties))
        .collect::<Vec<_>>()
        .join("\n\n")
}
