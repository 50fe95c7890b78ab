//! Custom validation functions for configuration.
//!
//! Shared validation logic used across configuration modules.

use validator::ValidationError;

use crate::devices::DeviceSeed;

/// Validate that every seeded device id appears exactly once.
pub fn validate_unique_device_ids(seed: &[DeviceSeed]) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    if seed.iter().any(|d| !seen.insert(d.id)) {
        return Err(ValidationError::new("duplicate_device_id"));
    }
    Ok(())
}
