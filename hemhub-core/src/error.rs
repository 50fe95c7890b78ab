use thiserror::Error;

use crate::devices::DeviceId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    #[error("Unknown device: {0}")]
    DeviceNotFound(DeviceId),

    #[error("Command already in flight for device {0}")]
    CommandInFlight(DeviceId),
}
