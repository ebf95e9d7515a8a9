use serde::Deserialize;

/// Telemetry configuration
///
/// Only structured logging for now; the filter uses `tracing-subscriber`
/// `EnvFilter` syntax and can still be overridden with `RUST_LOG`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Log filter directive (e.g. "info" or "explorer_server=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}
