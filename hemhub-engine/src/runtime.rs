/*!
# Runtime Engine

Mode facades shared by every frontend: deterministic scenario replay on
the virtual clock, and a live mode that paces the same timer queue
against the wall clock.
*/

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use opentelemetry::KeyValue;
use parking_lot::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::{info, instrument};

use hemhub_config::HemhubConfig;
use hemhub_core::devices::DeviceId;
use hemhub_core::time::NS_PER_MS;
use hemhub_telemetry::{logging::EventLogger, MetricsRecorder};

use crate::engine::{
    forward_events, run_scenario, DashboardSession, EngineError, LogTransport, Scenario,
    SessionAction, SharedConnectivity, TimedAction, TracingRenderer,
};

fn load_config(path: Option<&Path>) -> Result<HemhubConfig, EngineError> {
    match path {
        Some(path) => Ok(HemhubConfig::load_from_path(path)?),
        None => Ok(HemhubConfig::load()?),
    }
}

fn load_scenario(path: Option<&Path>) -> Result<Scenario, EngineError> {
    match path {
        Some(path) => {
            info!("Loading scenario from file: {:?}", path);
            Scenario::load_from_file(path)
        }
        None => Ok(Scenario::demo()),
    }
}

/// Replays a scenario deterministically and logs the final state hash.
#[instrument(level = "info", name = "run_scenario_mode", skip(metrics))]
pub async fn run_scenario_mode(
    config_path: Option<&Path>,
    scenario_path: Option<&Path>,
    seed_override: Option<u64>,
    validate_hash: Option<&str>,
    metrics: MetricsRecorder,
) -> Result<(), EngineError> {
    let config = load_config(config_path)?;
    let mut scenario = load_scenario(scenario_path)?;
    if let Some(seed) = seed_override {
        scenario.seed = seed;
    }
    if let Some(expected) = validate_hash {
        scenario.expected_hash = Some(expected.into());
    }

    let mut renderer = TracingRenderer;
    let final_hash = run_scenario(&config, &scenario, metrics, &mut renderer)?;
    info!("Simulation complete. State hash: {}", final_hash);
    EventLogger::log_event(
        "simulation_complete",
        vec![
            KeyValue::new("seed", scenario.seed.to_string()),
            KeyValue::new("final_hash", final_hash),
        ],
    )
    .await;
    Ok(())
}

/// Runs a session against the wall clock: scripted actions and timers
/// fire at their real offsets until interrupted, the optional duration
/// elapses, or the script and all one-shot timers drain.
#[instrument(level = "info", name = "run_live_mode", skip(metrics))]
pub async fn run_live_mode(
    config_path: Option<&Path>,
    scenario_path: Option<&Path>,
    seed_override: Option<u64>,
    duration: Option<Duration>,
    metrics: MetricsRecorder,
) -> Result<(), EngineError> {
    let config = load_config(config_path)?;
    let mut scenario = load_scenario(scenario_path)?;
    if let Some(seed) = seed_override {
        scenario.seed = seed;
    }

    let signal = SharedConnectivity::new(true);
    let environment = signal.clone();
    let session = Arc::new(Mutex::new(DashboardSession::new(
        &config,
        scenario.seed,
        Box::new(LogTransport),
        Box::new(signal),
        metrics,
    )));

    {
        let mut guard = session.lock();
        guard.start();
        forward_events(&guard, &mut TracingRenderer);
    }

    let deadline = async {
        match duration {
            Some(limit) => sleep_until(Instant::now() + limit).await,
            None => std::future::pending::<()>().await,
        }
    };

    let outcome = tokio::select! {
        result = pace_session(session.clone(), &scenario, environment) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted; shutting down");
            Ok(())
        }
        _ = deadline => {
            info!("Run window elapsed; shutting down");
            Ok(())
        }
    };

    session.lock().shutdown();
    EventLogger::log_event(
        "live_session_complete",
        vec![KeyValue::new("seed", scenario.seed.to_string())],
    )
    .await;
    outcome
}

/// Wall-clock pacing loop: sleeps to the next action or timer deadline,
/// then drives the session exactly as the virtual-clock replay would.
async fn pace_session(
    session: Arc<Mutex<DashboardSession>>,
    scenario: &Scenario,
    environment: SharedConnectivity,
) -> Result<(), EngineError> {
    let started = Instant::now();
    let mut renderer = TracingRenderer;
    let mut actions: Vec<TimedAction> = scenario.actions.clone();
    actions.sort_by_key(|timed| timed.at_ms);
    let mut next_action = 0;

    loop {
        let action_deadline = actions.get(next_action).map(|timed| timed.at_ms * NS_PER_MS);
        let timer_deadline = session.lock().next_deadline();
        let target_ns = match (action_deadline, timer_deadline) {
            (Some(action), Some(timer)) => action.min(timer),
            (Some(action), None) => action,
            (None, Some(timer)) => timer,
            (None, None) => break,
        };

        sleep_until(started + Duration::from_nanos(target_ns)).await;

        let mut guard = session.lock();
        guard.run_until(target_ns);
        while next_action < actions.len() && actions[next_action].at_ms * NS_PER_MS <= target_ns {
            match &actions[next_action].action {
                SessionAction::Toggle { device } => guard.toggle(DeviceId(*device))?,
                SessionAction::CheckConnectivity => guard.check_connectivity(),
                SessionAction::Refresh => guard.refresh(),
                SessionAction::SetOnline { online } => {
                    environment.set_online(*online);
                    guard.connectivity_changed(*online);
                }
            }
            next_action += 1;
        }
        forward_events(&guard, &mut renderer);
        drop(guard);
    }

    info!("Script and timers drained");
    Ok(())
}
