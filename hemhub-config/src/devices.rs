//! Device seeding configuration.
//!
//! The registry is populated once at session start from these entries;
//! there is no runtime device discovery.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// One device to register at session start.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct DeviceSeed {
    /// Registry-unique identifier.
    pub id: u32,

    /// Display label.
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    /// Initial on/off state.
    #[serde(default)]
    pub status: bool,
}

/// Device registry configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct DevicesConfig {
    /// Devices registered at session start, in listing order.
    #[serde(default = "default_seed")]
    #[validate(
        length(min = 1, max = 64),
        custom(function = validation::validate_unique_device_ids),
        nested
    )]
    pub seed: Vec<DeviceSeed>,
}

fn default_seed() -> Vec<DeviceSeed> {
    (1..=4)
        .map(|id| DeviceSeed {
            id,
            name: format!("Device {id}"),
            status: false,
        })
        .collect()
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}
