//! # hemhub-engine
//!
//! The dashboard session engine: turns user intents (toggle, connectivity
//! probe, refresh) into timer-sequenced state changes over the core
//! components, and replays recorded scenarios deterministically on the
//! virtual clock.

pub mod engine;
pub mod runtime;

pub use engine::{
    CommandTransport, ConnectivitySignal, DashboardSession, EngineError, LogTransport, RenderSink,
    Scenario, SharedConnectivity, TracingRenderer,
};
pub use runtime::{run_live_mode, run_scenario_mode};
