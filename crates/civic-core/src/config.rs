//! Runtime Configuration
//!
//! Timings and identity strings that the views read instead of hardcoding.
//! Parsed from JSON; missing keys take their defaults.

use serde::{Deserialize, Serialize};

use crate::domain::{CurrentUser, DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Product name shown in the sidebar and landing header
    pub brand_name: String,
    /// Delay before a simulated AI report completes
    pub report_generation_ms: u32,
    /// Delay before simulated voice capture produces text
    pub voice_capture_ms: u32,
    /// Canned voice capture output
    pub voice_transcript: String,
    /// How many complaints the dashboard lists
    pub recent_reports_limit: usize,
    /// `reported_by` for complaints filed from the dashboard
    pub default_reporter: String,
    pub current_user: CurrentUser,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: "CivicTracker".to_string(),
            report_generation_ms: 3000,
            voice_capture_ms: 3000,
            voice_transcript: "Voice recording: There is a large pothole on Main Street that needs immediate attention."
                .to_string(),
            recent_reports_limit: 5,
            default_reporter: "Current User".to_string(),
            current_user: CurrentUser::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidInput(e.to_string()))
    }

    /// Parse `json`, logging and falling back to defaults when it is malformed
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("config rejected ({}), using defaults", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.report_generation_ms, 3000);
        assert_eq!(config.recent_reports_limit, 5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"report_generation_ms": 500}"#).unwrap();
        assert_eq!(config.report_generation_ms, 500);
        assert_eq!(config.voice_capture_ms, 3000);
        assert_eq!(config.current_user.name, "John Smith");
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert!(matches!(AppConfig::from_json("{not json"), Err(DomainError::InvalidInput(_))));
        assert_eq!(AppConfig::from_json_or_default("{not json"), AppConfig::default());
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = AppConfig::from_json(include_str!("../../../config/app.json")).unwrap();
        assert_eq!(config.brand_name, "CivicTracker");
    }
}
