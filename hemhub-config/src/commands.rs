//! Command pipeline timing and policy configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// How overlapping toggle requests for the same device are handled.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InFlightPolicy {
    /// Both requests run their own latency window and commit in delay
    /// order; each commit negates the status it finds. Matches the
    /// original dashboard behavior.
    #[default]
    Independent,
    /// A second request before the first commit fails immediately.
    Reject,
}

/// Simulated latency windows for user-initiated operations.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CommandsConfig {
    /// Round-trip window between a toggle request and its commit (ms).
    #[serde(default = "default_toggle_latency_ms")]
    #[validate(range(min = 0, max = 60_000))]
    pub toggle_latency_ms: u64,

    /// Delay before the connectivity probe reads the signal (ms).
    #[serde(default = "default_probe_delay_ms")]
    #[validate(range(min = 0, max = 60_000))]
    pub probe_delay_ms: u64,

    /// How long the indicator keeps its probe result styling (ms).
    #[serde(default = "default_indicator_reset_ms")]
    #[validate(range(min = 0, max = 60_000))]
    pub indicator_reset_ms: u64,

    /// Duration of the refresh rotation affordance (ms).
    #[serde(default = "default_refresh_spin_ms")]
    #[validate(range(min = 0, max = 10_000))]
    pub refresh_spin_ms: u64,

    /// Overlapping-toggle policy.
    #[serde(default)]
    pub in_flight: InFlightPolicy,
}

fn default_toggle_latency_ms() -> u64 {
    500
}
fn default_probe_delay_ms() -> u64 {
    1000
}
fn default_indicator_reset_ms() -> u64 {
    2000
}
fn default_refresh_spin_ms() -> u64 {
    500
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            toggle_latency_ms: default_toggle_latency_ms(),
            probe_delay_ms: default_probe_delay_ms(),
            indicator_reset_ms: default_indicator_reset_ms(),
            refresh_spin_ms: default_refresh_spin_ms(),
            in_flight: InFlightPolicy::Independent,
        }
    }
}
