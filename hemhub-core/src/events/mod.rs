//! UI-facing events and the bus that carries them.
//!
//! Components never call a rendering surface directly; every observable
//! state change becomes a snapshot-carrying [`UiEvent`] on the bus, and a
//! sink at the edge drains it.

pub mod bus;
pub mod ui;

pub use bus::{BusError, UiEventBus};
pub use ui::{IndicatorState, UiEvent, UiEventKind};
