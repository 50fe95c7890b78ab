//! Core system configuration parameters.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Core system configuration parameters.
#[derive(Default, Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CoreConfig {
    /// UI event bus sizing.
    #[validate(nested)]
    pub event_bus: EventBusConfig,
}

/// UI event bus configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct EventBusConfig {
    /// Maximum queued UI events before producers see overflow.
    #[serde(default = "default_capacity")]
    #[validate(range(min = 16, max = 1_048_576))]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    1024
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}
