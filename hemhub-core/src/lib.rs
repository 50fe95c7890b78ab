//! # hemhub-core
//!
//! Foundation layer for the hemhub dashboard session: device and sensor
//! state, the notification board, UI events, and deterministic timing.
//! Built so the whole session can run on a virtual clock with no rendering
//! surface attached.
//!
//! ### Key Submodules:
//! - `devices`: canonical device identity and on/off state
//! - `sensors`: seeded simulated readings within configured bounds
//! - `notify`: transient notifications with a three-phase lifecycle
//! - `events`: snapshot-carrying UI events + bounded multi-producer bus
//! - `time`: `VirtualClock` using atomic counters + cancellable timer queue

pub mod devices;
pub mod error;
pub mod events;
pub mod notify;
pub mod sensors;
pub mod time;

pub mod prelude {
    pub use crate::devices::*;
    pub use crate::error::*;
    pub use crate::events::*;
    pub use crate::notify::*;
    pub use crate::sensors::*;
    pub use crate::time::*;
}

pub use error::HubError;
