//! Shared helpers for engine tests.

use std::sync::Arc;

use parking_lot::Mutex;

use hemhub_core::devices::DeviceId;

use super::render::RenderSink;
use super::transport::{CommandTransport, TransportError};

/// Records every command the session sends, for asserting on the
/// transport seam.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    pub sent: Arc<Mutex<Vec<(DeviceId, bool)>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(DeviceId, bool)> {
        self.sent.lock().clone()
    }
}

impl CommandTransport for RecordingTransport {
    fn send_command(&mut self, device: DeviceId, status: bool) -> Result<(), TransportError> {
        self.sent.lock().push((device, status));
        Ok(())
    }
}

/// Rejects every command, for exercising the failure path.
#[derive(Debug, Default)]
pub struct FailingTransport;

impl CommandTransport for FailingTransport {
    fn send_command(&mut self, _device: DeviceId, _status: bool) -> Result<(), TransportError> {
        Err(TransportError::Rejected("device unreachable".into()))
    }
}

/// Sink that ignores everything.
pub struct NullSink;

impl RenderSink for NullSink {}
