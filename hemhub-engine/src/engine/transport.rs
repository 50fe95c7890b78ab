//! Device command transport seam.
//!
//! The session never talks to real hardware; commands leave through this
//! trait. The bundled stub only logs, matching the simulated dashboard. A
//! production transport would carry the request/response channel and is
//! expected to fail sometimes, which is why the seam is fallible.

use std::time::Duration;

use thiserror::Error;
use tracing::info;

use hemhub_core::devices::DeviceId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Command rejected: {0}")]
    Rejected(String),

    #[error("Command timed out after {0:?}")]
    TimedOut(Duration),
}

/// Fire-and-forget command channel to the (simulated) device fleet.
pub trait CommandTransport: Send {
    fn send_command(&mut self, device: DeviceId, status: bool) -> Result<(), TransportError>;
}

/// Stub transport: logs the command and always succeeds.
#[derive(Debug, Default, Clone)]
pub struct LogTransport;

impl CommandTransport for LogTransport {
    fn send_command(&mut self, device: DeviceId, status: bool) -> Result<(), TransportError> {
        info!(
            device = %device,
            status = if status { "ON" } else { "OFF" },
            "Sending command to device"
        );
        Ok(())
    }
}
