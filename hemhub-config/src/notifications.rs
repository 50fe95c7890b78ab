//! Notification lifecycle configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Phase durations and the live-entry cap.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct NotificationsConfig {
    /// How long an entry stays visible before it starts exiting (ms).
    #[serde(default = "default_visible_ms")]
    #[validate(range(min = 100, max = 60_000))]
    pub visible_ms: u64,

    /// Exit animation window before removal (ms).
    #[serde(default = "default_exit_ms")]
    #[validate(range(min = 0, max = 5_000))]
    pub exit_ms: u64,

    /// Maximum concurrently live entries; the oldest is evicted beyond
    /// this.
    #[serde(default = "default_max_live")]
    #[validate(range(min = 1, max = 1024))]
    pub max_live: usize,
}

fn default_visible_ms() -> u64 {
    3000
}
fn default_exit_ms() -> u64 {
    300
}
fn default_max_live() -> usize {
    32
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            visible_ms: default_visible_ms(),
            exit_ms: default_exit_ms(),
            max_live: default_max_live(),
        }
    }
}
