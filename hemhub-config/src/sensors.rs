//! Sensor feed configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Periodic reading generation parameters.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct SensorsConfig {
    /// Regeneration cadence in milliseconds.
    #[serde(default = "default_interval_ms")]
    #[validate(range(min = 100, max = 3_600_000))]
    pub interval_ms: u64,

    /// Lower temperature bound, inclusive (°C).
    #[serde(default = "default_temperature_min")]
    #[validate(range(min = -50, max = 100))]
    pub temperature_min: i32,

    /// Upper temperature bound, inclusive (°C).
    #[serde(default = "default_temperature_max")]
    #[validate(range(min = -50, max = 100))]
    pub temperature_max: i32,

    /// Lower humidity bound, inclusive (%).
    #[serde(default = "default_humidity_min")]
    #[validate(range(min = 0, max = 100))]
    pub humidity_min: i32,

    /// Upper humidity bound, inclusive (%).
    #[serde(default = "default_humidity_max")]
    #[validate(range(min = 0, max = 100))]
    pub humidity_max: i32,
}

fn default_interval_ms() -> u64 {
    5000
}
fn default_temperature_min() -> i32 {
    5
}
fn default_temperature_max() -> i32 {
    19
}
fn default_humidity_min() -> i32 {
    20
}
fn default_humidity_max() -> i32 {
    99
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            temperature_min: default_temperature_min(),
            temperature_max: default_temperature_max(),
            humidity_min: default_humidity_min(),
            humidity_max: default_humidity_max(),
        }
    }
}

impl SensorsConfig {
    /// Cross-field check: both ranges must be ordered. Field validators
    /// cannot see sibling fields, so this runs at load time.
    pub fn check_bounds(&self) -> Result<(), String> {
        if self.temperature_min > self.temperature_max {
            return Err(format!(
                "sensors.temperature bounds are inverted ({} > {})",
                self.temperature_min, self.temperature_max
            ));
        }
        if self.humidity_min > self.humidity_max {
            return Err(format!(
                "sensors.humidity bounds are inverted ({} > {})",
                self.humidity_min, self.humidity_max
            ));
        }
        Ok(())
    }
}
