use std::env;

use crate::parse_bool;

/// Logging and metrics settings.
///
/// - `LOG_LEVEL`: level for Marquee's own targets (default: `info`)
/// - `LOG_DIR`: directory for rolling log files (default: `storage/logs`)
/// - `METRICS_ENABLED`: install the Prometheus recorder (default: `true`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub log_dir: String,
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "storage/logs".to_string(),
            metrics_enabled: true,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            metrics_enabled: env::var("METRICS_ENABLED")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.metrics_enabled),
        }
    }
}
