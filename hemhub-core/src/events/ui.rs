//! UI event types and snapshot payloads.

use serde::{Deserialize, Serialize};

use crate::devices::{Device, DeviceId};
use crate::notify::{NotificationEntry, NotificationId};
use crate::sensors::SensorReading;

/// Ephemeral visual state of the connectivity indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorState {
    Neutral,
    Probing,
    Online,
    Offline,
}

/// One observable state change, stamped with virtual time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    /// Virtual timestamp in nanoseconds.
    pub timestamp_ns: u64,
    pub kind: UiEventKind,
}

impl UiEvent {
    #[inline]
    pub fn new(timestamp_ns: u64, kind: UiEventKind) -> Self {
        Self { timestamp_ns, kind }
    }
}

/// What changed. Payloads are snapshots; receivers never reach back into
/// session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEventKind {
    /// A toggle request is awaiting its commit; show a loading affordance.
    DevicePending { id: DeviceId },
    /// A commit landed (or a failed commit cleared the affordance).
    DeviceChanged { device: Device },
    SensorsUpdated { reading: SensorReading },
    /// An entry was created or changed phase; the snapshot carries the
    /// current phase.
    Notification { entry: NotificationEntry },
    NotificationRemoved { id: NotificationId },
    ConnectionIndicator { state: IndicatorState },
    RefreshSpinner { spinning: bool },
}
