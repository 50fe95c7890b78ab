//! Timer payloads dispatched by the session.
//!
//! Every delayed step of the pipeline is one of these, scheduled on the
//! core timer queue and interpreted by
//! [`DashboardSession`](super::DashboardSession) when its deadline comes
//! up.

use hemhub_core::devices::DeviceId;
use hemhub_core::notify::NotificationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Commit a toggle after its simulated round-trip window.
    CommitToggle {
        device: DeviceId,
        /// Virtual time of the originating request, for latency metrics.
        requested_ns: u64,
    },
    /// Read the connectivity signal and surface the result.
    ProbeConnectivity,
    /// Return the connectivity indicator to neutral styling.
    ResetIndicator,
    /// Move a notification to its next phase.
    NotificationAdvance { id: NotificationId },
    /// Drop a notification entirely once its exit window elapsed.
    NotificationRemove { id: NotificationId },
    /// Regenerate the sensor reading and reschedule the cadence.
    SensorTick,
    /// Stop the refresh rotation affordance.
    RefreshSpinEnd,
}
