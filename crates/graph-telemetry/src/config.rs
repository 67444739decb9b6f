//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging and metrics.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to log lines
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Whether to include file/line in log output
    pub source_locations: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "entity-graph".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            source_locations: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DEPGRAPH_SERVICE_NAME`: Service name (default: entity-graph)
    /// - `DEPGRAPH_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `DEPGRAPH_JSON_LOGS`: Enable JSON logs (default: false outside containers)
    /// - `DEPGRAPH_SOURCE_LOCATIONS`: Include file/line (default: false)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("DEPGRAPH_SERVICE_NAME")
                .unwrap_or_else(|_| "entity-graph".to_string()),

            log_level: env::var("DEPGRAPH_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("DEPGRAPH_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(is_container),

            source_locations: env::var("DEPGRAPH_SOURCE_LOCATIONS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Override the log level, keeping everything else.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}
