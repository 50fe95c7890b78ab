//! Device identity and on/off state.
//!
//! The registry is the single owner of device state. Status changes flow
//! through the command pipeline's commit step; nothing else writes here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HubError;

/// Stable device identifier, unique within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub u32);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A simulated controllable endpoint with boolean on/off state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub status: bool,
}

/// Holds every device for the lifetime of the session, in registration
/// order. Devices are never destroyed, only mutated in place.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a device. Later registrations with a duplicate id are
    /// rejected upstream by configuration validation; the registry itself
    /// keeps first-wins semantics.
    pub fn register(&mut self, id: DeviceId, name: impl Into<String>, status: bool) {
        if self.devices.iter().any(|d| d.id == id) {
            return;
        }
        self.devices.push(Device {
            id,
            name: name.into(),
            status,
        });
    }

    pub fn get(&self, id: DeviceId) -> Result<&Device, HubError> {
        self.devices
            .iter()
            .find(|d| d.id == id)
            .ok_or(HubError::DeviceNotFound(id))
    }

    /// Overwrites the status and returns the post-write snapshot.
    /// Observably idempotent when the value is unchanged.
    pub fn set_status(&mut self, id: DeviceId, status: bool) -> Result<Device, HubError> {
        let device = self
            .devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(HubError::DeviceNotFound(id))?;
        device.status = status;
        Ok(device.clone())
    }

    /// Devices in fixed registration order, for the initial UI sync.
    pub fn list(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> DeviceRegistry {
        let mut registry = DeviceRegistry::new();
        for i in 1..=4 {
            registry.register(DeviceId(i), format!("Device {i}"), false);
        }
        registry
    }

    #[test]
    fn list_preserves_registration_order() {
        let registry = seeded();
        let ids: Vec<u32> = registry.list().iter().map(|d| d.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn set_status_overwrites_and_snapshots() {
        let mut registry = seeded();
        let snapshot = registry.set_status(DeviceId(2), true).unwrap();
        assert!(snapshot.status);
        assert_eq!(snapshot.name, "Device 2");
        assert!(registry.get(DeviceId(2)).unwrap().status);
    }

    #[test]
    fn unknown_id_is_not_found_and_leaves_state_alone() {
        let mut registry = seeded();
        assert_eq!(
            registry.get(DeviceId(9)),
            Err(HubError::DeviceNotFound(DeviceId(9)))
        );
        assert_eq!(
            registry.set_status(DeviceId(9), true),
            Err(HubError::DeviceNotFound(DeviceId(9)))
        );
        assert!(registry.list().iter().all(|d| !d.status));
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let mut registry = seeded();
        registry.register(DeviceId(1), "Impostor", true);
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get(DeviceId(1)).unwrap().name, "Device 1");
    }
}
