mod connectivity;
mod error;
mod render;
mod scenario;
mod session;
mod task;
mod transport;

#[cfg(test)]
pub(crate) mod testutil;

pub use self::{
    connectivity::{ConnectivitySignal, SharedConnectivity},
    error::EngineError,
    render::{forward_events, RenderSink, TracingRenderer},
    scenario::{run_scenario, Scenario, SessionAction, TimedAction},
    session::DashboardSession,
    task::Task,
    transport::{CommandTransport, LogTransport, TransportError},
};

pub mod prelude {
    pub use super::{
        forward_events, run_scenario, CommandTransport, ConnectivitySignal, DashboardSession,
        EngineError, LogTransport, RenderSink, Scenario, SharedConnectivity, TracingRenderer,
    };
}
