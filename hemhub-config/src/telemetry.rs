//! Observability configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct MetricsConfig {
    /// Enable the prometheus registry.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct TracingConfig {
    /// Default filter directive when RUST_LOG is unset.
    #[serde(default = "default_filter")]
    pub default_filter: String,
}

fn default_true() -> bool {
    true
}
fn default_filter() -> String {
    "info".into()
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_filter: default_filter(),
        }
    }
}

/// Telemetry configuration.
#[derive(Default, Debug, Serialize, Deserialize, Validate, Clone)]
pub struct TelemetryConfig {
    /// Metrics collection parameters.
    #[validate(nested)]
    pub metrics: MetricsConfig,

    /// Tracing parameters.
    #[validate(nested)]
    pub tracing: TracingConfig,
}
