//! Render seam.
//!
//! The session's only contact with a presentation layer: events drained
//! off the bus are forwarded to a [`RenderSink`]. The core stays fully
//! testable with no rendering surface attached.

use tracing::info;

use hemhub_core::devices::{Device, DeviceId};
use hemhub_core::events::{IndicatorState, UiEventKind};
use hemhub_core::notify::{NotificationEntry, NotificationId};
use hemhub_core::sensors::SensorReading;

use super::session::DashboardSession;

/// Pure-presentation observer; no business logic behind any method.
pub trait RenderSink {
    fn device_pending(&mut self, _id: DeviceId) {}
    fn device_changed(&mut self, _device: &Device) {}
    fn sensors_updated(&mut self, _reading: &SensorReading) {}
    fn notification(&mut self, _entry: &NotificationEntry) {}
    fn notification_removed(&mut self, _id: NotificationId) {}
    fn connection_indicator(&mut self, _state: IndicatorState) {}
    fn refresh_spinner(&mut self, _spinning: bool) {}
}

/// Drains the session's event bus into the sink, in emit order.
pub fn forward_events(session: &DashboardSession, sink: &mut dyn RenderSink) {
    for event in session.drain_events() {
        match &event.kind {
            UiEventKind::DevicePending { id } => sink.device_pending(*id),
            UiEventKind::DeviceChanged { device } => sink.device_changed(device),
            UiEventKind::SensorsUpdated { reading } => sink.sensors_updated(reading),
            UiEventKind::Notification { entry } => sink.notification(entry),
            UiEventKind::NotificationRemoved { id } => sink.notification_removed(*id),
            UiEventKind::ConnectionIndicator { state } => sink.connection_indicator(*state),
            UiEventKind::RefreshSpinner { spinning } => sink.refresh_spinner(*spinning),
        }
    }
}

/// Headless renderer: one log line per visual change.
#[derive(Debug, Default)]
pub struct TracingRenderer;

impl RenderSink for TracingRenderer {
    fn device_pending(&mut self, id: DeviceId) {
        info!(device = %id, "Device control pending");
    }

    fn device_changed(&mut self, device: &Device) {
        info!(
            device = %device.id,
            name = %device.name,
            status = if device.status { "ON" } else { "OFF" },
            "Device state rendered"
        );
    }

    fn sensors_updated(&mut self, reading: &SensorReading) {
        info!(
            temperature = format!("{}°C", reading.temperature),
            humidity = format!("{}%", reading.humidity),
            "Sensors rendered"
        );
    }

    fn notification(&mut self, entry: &NotificationEntry) {
        info!(
            id = entry.id.0,
            phase = ?entry.phase,
            kind = ?entry.kind,
            message = %entry.message,
            "Notification"
        );
    }

    fn notification_removed(&mut self, id: NotificationId) {
        info!(id = id.0, "Notification removed");
    }

    fn connection_indicator(&mut self, state: IndicatorState) {
        info!(state = ?state, "Connection indicator");
    }

    fn refresh_spinner(&mut self, spinning: bool) {
        info!(spinning, "Refresh affordance");
    }
}
