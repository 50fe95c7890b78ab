//! Recorded scenarios and deterministic replay.
//!
//! A scenario is a seed plus timed user actions. Replaying one on the
//! virtual clock reproduces the exact same session, which the blake3
//! state hash makes checkable: regressions show up as a digest change.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use hemhub_config::HemhubConfig;
use hemhub_core::devices::DeviceId;
use hemhub_core::time::NS_PER_MS;
use hemhub_telemetry::MetricsRecorder;

use super::connectivity::SharedConnectivity;
use super::error::EngineError;
use super::render::{forward_events, RenderSink};
use super::session::DashboardSession;
use super::transport::LogTransport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    /// Seed for the sensor simulator.
    pub seed: u64,
    /// When present, replay fails unless the final state hash matches.
    #[serde(default)]
    pub expected_hash: Option<String>,
    pub actions: Vec<TimedAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedAction {
    /// Virtual session time at which the action fires.
    pub at_ms: u64,
    pub action: SessionAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionAction {
    Toggle { device: u32 },
    CheckConnectivity,
    Refresh,
    /// External online/offline transition pushed by the environment.
    SetOnline { online: bool },
}

impl Scenario {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Built-in demo played when no scenario file is given: a few
    /// toggles (including an overlapping pair), a probe while online, a
    /// refresh, then a probe after the environment goes offline.
    pub fn demo() -> Self {
        Self {
            name: Some("demo".into()),
            seed: 42,
            expected_hash: None,
            actions: vec![
                TimedAction {
                    at_ms: 100,
                    action: SessionAction::Toggle { device: 1 },
                },
                TimedAction {
                    at_ms: 700,
                    action: SessionAction::Toggle { device: 2 },
                },
                TimedAction {
                    at_ms: 800,
                    action: SessionAction::Toggle { device: 2 },
                },
                TimedAction {
                    at_ms: 1_500,
                    action: SessionAction::CheckConnectivity,
                },
                TimedAction {
                    at_ms: 5_200,
                    action: SessionAction::Refresh,
                },
                TimedAction {
                    at_ms: 6_000,
                    action: SessionAction::SetOnline { online: false },
                },
                TimedAction {
                    at_ms: 6_100,
                    action: SessionAction::CheckConnectivity,
                },
                TimedAction {
                    at_ms: 9_000,
                    action: SessionAction::Toggle { device: 3 },
                },
            ],
        }
    }
}

/// Replays `scenario` on the virtual clock and returns the final state
/// hash. The sensor cadence runs for the whole scripted window; after the
/// last action it is stopped and remaining one-shot timers drain.
pub fn run_scenario(
    config: &HemhubConfig,
    scenario: &Scenario,
    metrics: MetricsRecorder,
    sink: &mut dyn RenderSink,
) -> Result<String, EngineError> {
    info!(
        name = scenario.name.as_deref().unwrap_or("unnamed"),
        seed = scenario.seed,
        actions = scenario.actions.len(),
        "Replaying scenario"
    );

    let signal = SharedConnectivity::new(true);
    let environment = signal.clone();
    let mut session = DashboardSession::new(
        config,
        scenario.seed,
        Box::new(LogTransport),
        Box::new(signal),
        metrics,
    );
    session.start();
    forward_events(&session, sink);

    let mut actions = scenario.actions.clone();
    actions.sort_by_key(|timed| timed.at_ms);

    for timed in &actions {
        session.run_until(timed.at_ms * NS_PER_MS);
        debug!(at_ms = timed.at_ms, action = ?timed.action, "Applying action");
        match &timed.action {
            SessionAction::Toggle { device } => session.toggle(DeviceId(*device))?,
            SessionAction::CheckConnectivity => session.check_connectivity(),
            SessionAction::Refresh => session.refresh(),
            SessionAction::SetOnline { online } => {
                environment.set_online(*online);
                session.connectivity_changed(*online);
            }
        }
        forward_events(&session, sink);
    }

    session.stop_sensor_feed();
    session.run_to_idle();
    forward_events(&session, sink);

    let actual = session.state_hash();
    session.shutdown();

    if let Some(expected) = &scenario.expected_hash {
        if expected != &actual {
            return Err(EngineError::HashMismatch {
                expected: expected.clone(),
                actual,
            });
        }
        info!("Scenario hash validated");
    }
    Ok(actual)
}
