//! Dashboard session state machine.
//!
//! One session owns every component for the lifetime of a run: the device
//! registry, the sensor simulator, the notification board, the UI event
//! bus, and the timer queue that sequences all delayed steps. Execution is
//! single-threaded run-to-completion: external calls and due timers mutate
//! state, emit snapshot events, and schedule further timers; nothing
//! blocks.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use hemhub_config::{HemhubConfig, InFlightPolicy};
use hemhub_core::devices::{Device, DeviceId, DeviceRegistry};
use hemhub_core::events::{IndicatorState, UiEvent, UiEventBus, UiEventKind};
use hemhub_core::notify::{NotificationBoard, NotificationId, NotificationKind, NotificationPhase};
use hemhub_core::sensors::{SensorReading, SensorSimulator};
use hemhub_core::time::{TimerId, TimerQueue, VirtualClock, NS_PER_MS};
use hemhub_core::HubError;
use hemhub_telemetry::MetricsRecorder;

use super::connectivity::ConnectivitySignal;
use super::task::Task;
use super::transport::CommandTransport;

/// Delay windows in virtual nanoseconds, derived from configuration once.
struct Timings {
    toggle_latency_ns: u64,
    probe_delay_ns: u64,
    indicator_reset_ns: u64,
    refresh_spin_ns: u64,
    sensor_interval_ns: u64,
    notif_visible_ns: u64,
    notif_exit_ns: u64,
}

impl Timings {
    fn from_config(config: &HemhubConfig) -> Self {
        Self {
            toggle_latency_ns: config.commands.toggle_latency_ms * NS_PER_MS,
            probe_delay_ns: config.commands.probe_delay_ms * NS_PER_MS,
            indicator_reset_ns: config.commands.indicator_reset_ms * NS_PER_MS,
            refresh_spin_ns: config.commands.refresh_spin_ms * NS_PER_MS,
            sensor_interval_ns: config.sensors.interval_ms * NS_PER_MS,
            notif_visible_ns: config.notifications.visible_ms * NS_PER_MS,
            notif_exit_ns: config.notifications.exit_ms * NS_PER_MS,
        }
    }
}

pub struct DashboardSession {
    clock: VirtualClock,
    timers: TimerQueue<Task>,
    registry: DeviceRegistry,
    simulator: SensorSimulator,
    reading: SensorReading,
    board: NotificationBoard,
    bus: UiEventBus,
    transport: Box<dyn CommandTransport>,
    connectivity: Box<dyn ConnectivitySignal>,
    metrics: MetricsRecorder,
    timings: Timings,
    in_flight_policy: InFlightPolicy,
    in_flight: HashMap<DeviceId, u32>,
    notif_timers: HashMap<NotificationId, TimerId>,
    sensor_timer: Option<TimerId>,
    feed_running: bool,
    state_hasher: blake3::Hasher,
}

impl DashboardSession {
    /// Builds a session from validated configuration. `seed` drives the
    /// sensor simulator; identical seeds replay identical feeds.
    pub fn new(
        config: &HemhubConfig,
        seed: u64,
        transport: Box<dyn CommandTransport>,
        connectivity: Box<dyn ConnectivitySignal>,
        metrics: MetricsRecorder,
    ) -> Self {
        let mut registry = DeviceRegistry::new();
        for entry in &config.devices.seed {
            registry.register(DeviceId(entry.id), entry.name.clone(), entry.status);
        }

        let mut simulator = SensorSimulator::new(
            seed,
            config.sensors.temperature_min..=config.sensors.temperature_max,
            config.sensors.humidity_min..=config.sensors.humidity_max,
        );
        let reading = simulator.sample();

        Self {
            clock: VirtualClock::new(0),
            timers: TimerQueue::new(),
            registry,
            simulator,
            reading,
            board: NotificationBoard::new(config.notifications.max_live),
            bus: UiEventBus::with_capacity(config.core.event_bus.capacity),
            transport,
            connectivity,
            metrics,
            timings: Timings::from_config(config),
            in_flight_policy: config.commands.in_flight,
            in_flight: HashMap::new(),
            notif_timers: HashMap::new(),
            sensor_timer: None,
            feed_running: false,
            state_hasher: blake3::Hasher::new(),
        }
    }

    /// Emits the initial UI sync (all devices plus the first reading) and
    /// begins the sensor cadence.
    pub fn start(&mut self) {
        info!(devices = self.registry.len(), "Dashboard session started");

        for device in self.registry.list().to_vec() {
            self.fold(format!("device:{}:{}", device.id, device.status));
            self.emit(UiEventKind::DeviceChanged { device });
        }

        let reading = self.reading;
        self.fold(format!(
            "sensors:{}:{}",
            reading.temperature, reading.humidity
        ));
        self.emit(UiEventKind::SensorsUpdated { reading });

        self.feed_running = true;
        let deadline = self.clock.now_ns() + self.timings.sensor_interval_ns;
        self.sensor_timer = Some(self.timers.schedule_at(deadline, Task::SensorTick));
    }

    /// Requests a toggle for `id`. The status flip happens only when the
    /// simulated round trip elapses; until then the device shows a pending
    /// affordance.
    pub fn toggle(&mut self, id: DeviceId) -> Result<(), HubError> {
        self.registry.get(id)?;

        let pending = self.in_flight.get(&id).copied().unwrap_or(0);
        if self.in_flight_policy == InFlightPolicy::Reject && pending > 0 {
            return Err(HubError::CommandInFlight(id));
        }
        *self.in_flight.entry(id).or_insert(0) += 1;

        self.emit(UiEventKind::DevicePending { id });
        let now = self.clock.now_ns();
        self.timers.schedule_at(
            now + self.timings.toggle_latency_ns,
            Task::CommitToggle {
                device: id,
                requested_ns: now,
            },
        );
        debug!(device = %id, "Toggle requested");
        Ok(())
    }

    /// Starts a connectivity probe: pending styling now, signal read after
    /// the probe delay, neutral styling restored after the reset window.
    pub fn check_connectivity(&mut self) {
        self.emit(UiEventKind::ConnectionIndicator {
            state: IndicatorState::Probing,
        });
        let deadline = self.clock.now_ns() + self.timings.probe_delay_ns;
        self.timers.schedule_at(deadline, Task::ProbeConnectivity);
        debug!("Connectivity probe started");
    }

    /// External online/offline transition pushed by the environment:
    /// restyles the indicator directly, with no probe and no
    /// notification.
    pub fn connectivity_changed(&mut self, online: bool) {
        let state = if online {
            IndicatorState::Online
        } else {
            IndicatorState::Offline
        };
        self.emit(UiEventKind::ConnectionIndicator { state });
    }

    /// Regenerates the sensor reading out of cadence, plays the rotation
    /// affordance, and confirms with a notification. Device state is
    /// untouched and the periodic cadence keeps its schedule.
    pub fn refresh(&mut self) {
        self.emit(UiEventKind::RefreshSpinner { spinning: true });
        let deadline = self.clock.now_ns() + self.timings.refresh_spin_ns;
        self.timers.schedule_at(deadline, Task::RefreshSpinEnd);

        self.regenerate_reading();
        self.push_notification("Data refreshed", NotificationKind::Info);
    }

    /// Cancels the periodic sensor cadence. Pending one-shot timers keep
    /// running.
    pub fn stop_sensor_feed(&mut self) {
        self.feed_running = false;
        if let Some(timer) = self.sensor_timer.take() {
            self.timers.cancel(timer);
        }
    }

    /// Tears the session down: nothing scheduled survives, so no callback
    /// can run against dead state.
    pub fn shutdown(&mut self) {
        self.stop_sensor_feed();
        self.timers.clear();
        self.in_flight.clear();
        self.notif_timers.clear();
        debug!(queued_events = self.bus.len(), "Session shut down");
    }

    /// Runs every timer due up to `deadline_ns` in deadline order, then
    /// leaves the clock at `deadline_ns`.
    pub fn run_until(&mut self, deadline_ns: u64) {
        while let Some(next) = self.timers.next_deadline() {
            if next > deadline_ns {
                break;
            }
            self.clock.advance_to(next);
            let now = self.clock.now_ns();
            while let Some((_, task)) = self.timers.pop_due(now) {
                self.dispatch(task);
            }
        }
        self.clock.advance_to(deadline_ns);
    }

    /// Drains the timer queue completely. Callers must stop the sensor
    /// feed first, otherwise the cadence reschedules forever.
    pub fn run_to_idle(&mut self) {
        while let Some(next) = self.timers.next_deadline() {
            self.clock.advance_to(next);
            let now = self.clock.now_ns();
            while let Some((_, task)) = self.timers.pop_due(now) {
                self.dispatch(task);
            }
        }
    }

    fn dispatch(&mut self, task: Task) {
        match task {
            Task::CommitToggle {
                device,
                requested_ns,
            } => self.commit_toggle(device, requested_ns),
            Task::ProbeConnectivity => self.finish_probe(),
            Task::ResetIndicator => self.emit(UiEventKind::ConnectionIndicator {
                state: IndicatorState::Neutral,
            }),
            Task::NotificationAdvance { id } => self.advance_notification(id),
            Task::NotificationRemove { id } => self.remove_notification(id),
            Task::SensorTick => self.sensor_tick(),
            Task::RefreshSpinEnd => self.emit(UiEventKind::RefreshSpinner { spinning: false }),
        }
    }

    /// The commit step: negates the status found at commit time, so two
    /// overlapping requests under the independent policy land as two
    /// sequential negations.
    fn commit_toggle(&mut self, id: DeviceId, requested_ns: u64) {
        if let Some(count) = self.in_flight.get_mut(&id) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.in_flight.remove(&id);
            }
        }

        let device = match self.registry.get(id) {
            Ok(device) => device.clone(),
            Err(_) => return,
        };
        let next = !device.status;

        match self.transport.send_command(id, next) {
            Ok(()) => {
                if let Ok(snapshot) = self.registry.set_status(id, next) {
                    self.fold(format!("commit:{}:{}", id, next));
                    self.emit(UiEventKind::DeviceChanged { device: snapshot });
                }
                let verb = if next { "ON" } else { "OFF" };
                self.push_notification(
                    format!("{} turned {}", device.name, verb),
                    NotificationKind::Info,
                );
                self.metrics.inc_commands_committed();
                let elapsed_ms = (self.clock.now_ns() - requested_ns) / NS_PER_MS;
                self.metrics.command_latency.observe(elapsed_ms as f64);
            }
            Err(err) => {
                warn!(device = %id, error = %err, "Command failed; keeping prior state");
                // Clears the pending affordance with the unchanged snapshot.
                self.emit(UiEventKind::DeviceChanged { device: device.clone() });
                self.push_notification(
                    format!("{} command failed", device.name),
                    NotificationKind::Failure,
                );
            }
        }
    }

    fn finish_probe(&mut self) {
        let online = self.connectivity.is_online();
        self.fold(format!("probe:{online}"));
        if online {
            self.emit(UiEventKind::ConnectionIndicator {
                state: IndicatorState::Online,
            });
            self.push_notification("Connected to WiFi", NotificationKind::Success);
        } else {
            self.emit(UiEventKind::ConnectionIndicator {
                state: IndicatorState::Offline,
            });
            self.push_notification("No internet connection", NotificationKind::Failure);
        }

        let deadline = self.clock.now_ns() + self.timings.indicator_reset_ns;
        self.timers.schedule_at(deadline, Task::ResetIndicator);
    }

    fn sensor_tick(&mut self) {
        self.sensor_timer = None;
        self.regenerate_reading();
        if self.feed_running {
            let deadline = self.clock.now_ns() + self.timings.sensor_interval_ns;
            self.sensor_timer = Some(self.timers.schedule_at(deadline, Task::SensorTick));
        }
    }

    fn regenerate_reading(&mut self) {
        let reading = self.simulator.sample();
        self.reading = reading;
        self.fold(format!(
            "sensors:{}:{}",
            reading.temperature, reading.humidity
        ));
        self.metrics.inc_sensor_ticks();
        self.emit(UiEventKind::SensorsUpdated { reading });
    }

    fn push_notification(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let pushed = self.board.push(message, kind);
        if let Some(evicted) = pushed.evicted {
            if let Some(timer) = self.notif_timers.remove(&evicted) {
                self.timers.cancel(timer);
            }
            self.emit(UiEventKind::NotificationRemoved { id: evicted });
        }

        self.fold(format!("notify:{}", pushed.entry.message));
        self.metrics.inc_notifications_pushed();
        self.emit(UiEventKind::Notification {
            entry: pushed.entry.clone(),
        });

        // Entering -> visible on the next dispatch round.
        let timer = self.timers.schedule_at(
            self.clock.now_ns(),
            Task::NotificationAdvance {
                id: pushed.entry.id,
            },
        );
        self.notif_timers.insert(pushed.entry.id, timer);
    }

    fn advance_notification(&mut self, id: NotificationId) {
        self.notif_timers.remove(&id);
        let entry = match self.board.advance(id) {
            Some(entry) => entry,
            // Evicted before its timer fired.
            None => return,
        };
        self.emit(UiEventKind::Notification {
            entry: entry.clone(),
        });

        let now = self.clock.now_ns();
        let timer = match entry.phase {
            NotificationPhase::Visible => self
                .timers
                .schedule_at(now + self.timings.notif_visible_ns, Task::NotificationAdvance { id }),
            NotificationPhase::Exiting => self
                .timers
                .schedule_at(now + self.timings.notif_exit_ns, Task::NotificationRemove { id }),
            NotificationPhase::Entering => return,
        };
        self.notif_timers.insert(id, timer);
    }

    fn remove_notification(&mut self, id: NotificationId) {
        self.notif_timers.remove(&id);
        if self.board.remove(id).is_some() {
            self.emit(UiEventKind::NotificationRemoved { id });
        }
    }

    fn emit(&mut self, kind: UiEventKind) {
        let event = UiEvent::new(self.clock.now_ns(), kind);
        if let Err(e) = self.bus.push(event) {
            warn!("Failed to queue UI event: {e}");
        }
    }

    fn fold(&mut self, token: String) {
        self.state_hasher.update(token.as_bytes());
    }

    /// Hex digest over every committed mutation so far. Equal seeds and
    /// action sequences produce equal digests.
    pub fn state_hash(&self) -> String {
        hex::encode(self.state_hasher.finalize().as_bytes())
    }

    pub fn now_ns(&self) -> u64 {
        self.clock.now_ns()
    }

    pub fn next_deadline(&mut self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending_len()
    }

    pub fn device(&self, id: DeviceId) -> Result<&Device, HubError> {
        self.registry.get(id)
    }

    pub fn devices(&self) -> &[Device] {
        self.registry.list()
    }

    pub fn reading(&self) -> SensorReading {
        self.reading
    }

    pub fn notifications(&self) -> usize {
        self.board.len()
    }

    /// Drains everything currently on the UI event bus, in emit order.
    pub fn drain_events(&self) -> Vec<UiEvent> {
        self.bus.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::connectivity::SharedConnectivity;
    use crate::engine::testutil::{FailingTransport, RecordingTransport};

    const MS: u64 = NS_PER_MS;

    fn session_with(
        config: &HemhubConfig,
        transport: Box<dyn CommandTransport>,
        online: bool,
    ) -> (DashboardSession, SharedConnectivity) {
        let signal = SharedConnectivity::new(online);
        let session = DashboardSession::new(
            config,
            42,
            transport,
            Box::new(signal.clone()),
            MetricsRecorder::new(),
        );
        (session, signal)
    }

    fn pushed_messages(events: &[UiEvent]) -> Vec<String> {
        events
            .iter()
            .filter_map(|event| match &event.kind {
                UiEventKind::Notification { entry }
                    if entry.phase == NotificationPhase::Entering =>
                {
                    Some(entry.message.clone())
                }
                _ => None,
            })
            .collect()
    }

    fn indicator_states(events: &[UiEvent]) -> Vec<IndicatorState> {
        events
            .iter()
            .filter_map(|event| match &event.kind {
                UiEventKind::ConnectionIndicator { state } => Some(*state),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn toggle_commits_after_latency() {
        let config = HemhubConfig::default();
        let transport = RecordingTransport::new();
        let (mut session, _) = session_with(&config, Box::new(transport.clone()), true);

        session.toggle(DeviceId(1)).unwrap();
        assert!(!session.device(DeviceId(1)).unwrap().status);

        session.run_until(499 * MS);
        assert!(!session.device(DeviceId(1)).unwrap().status);

        session.run_until(500 * MS);
        assert!(session.device(DeviceId(1)).unwrap().status);

        let events = session.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e.kind, UiEventKind::DevicePending { id } if id == DeviceId(1))));
        assert!(pushed_messages(&events).contains(&"Device 1 turned ON".to_string()));
        assert_eq!(transport.sent(), vec![(DeviceId(1), true)]);
    }

    #[test]
    fn toggle_negates_whatever_it_finds() {
        let config = HemhubConfig::default();
        let (mut session, _) = session_with(&config, Box::new(RecordingTransport::new()), true);

        for round in 1..=4 {
            let before = session.device(DeviceId(3)).unwrap().status;
            session.toggle(DeviceId(3)).unwrap();
            session.run_until(round * 1_000 * MS);
            assert_eq!(session.device(DeviceId(3)).unwrap().status, !before);
        }
    }

    #[test]
    fn unknown_device_is_rejected_without_side_effects() {
        let config = HemhubConfig::default();
        let transport = RecordingTransport::new();
        let (mut session, _) = session_with(&config, Box::new(transport.clone()), true);

        assert_eq!(
            session.toggle(DeviceId(9)),
            Err(HubError::DeviceNotFound(DeviceId(9)))
        );
        session.run_until(1_000 * MS);

        assert!(session.devices().iter().all(|d| !d.status));
        assert!(transport.sent().is_empty());
        assert_eq!(session.drain_events().len(), 0);
    }

    #[test]
    fn overlapping_toggles_commit_in_delay_order() {
        let config = HemhubConfig::default();
        let transport = RecordingTransport::new();
        let (mut session, _) = session_with(&config, Box::new(transport.clone()), true);

        session.toggle(DeviceId(2)).unwrap();
        session.run_until(100 * MS);
        session.toggle(DeviceId(2)).unwrap();
        session.run_until(1_000 * MS);

        // Two sequential negations: off -> on -> off.
        assert!(!session.device(DeviceId(2)).unwrap().status);
        assert_eq!(
            transport.sent(),
            vec![(DeviceId(2), true), (DeviceId(2), false)]
        );
        assert_eq!(
            pushed_messages(&session.drain_events()),
            vec!["Device 2 turned ON", "Device 2 turned OFF"]
        );
    }

    #[test]
    fn reject_policy_guards_in_flight_commands() {
        let mut config = HemhubConfig::default();
        config.commands.in_flight = InFlightPolicy::Reject;
        let transport = RecordingTransport::new();
        let (mut session, _) = session_with(&config, Box::new(transport.clone()), true);

        session.toggle(DeviceId(2)).unwrap();
        session.run_until(100 * MS);
        assert_eq!(
            session.toggle(DeviceId(2)),
            Err(HubError::CommandInFlight(DeviceId(2)))
        );
        session.run_until(1_000 * MS);

        assert!(session.device(DeviceId(2)).unwrap().status);
        assert_eq!(transport.sent(), vec![(DeviceId(2), true)]);

        // The window is free again after the commit.
        session.toggle(DeviceId(2)).unwrap();
        session.run_until(2_000 * MS);
        assert!(!session.device(DeviceId(2)).unwrap().status);
    }

    #[test]
    fn offline_probe_sequence() {
        let config = HemhubConfig::default();
        let (mut session, _) = session_with(&config, Box::new(RecordingTransport::new()), false);

        session.check_connectivity();
        session.run_until(999 * MS);
        let early = session.drain_events();
        assert_eq!(indicator_states(&early), vec![IndicatorState::Probing]);

        session.run_until(1_000 * MS);
        let probed = session.drain_events();
        assert_eq!(indicator_states(&probed), vec![IndicatorState::Offline]);
        assert!(pushed_messages(&probed).contains(&"No internet connection".to_string()));

        session.run_until(3_000 * MS);
        let reset = session.drain_events();
        assert_eq!(indicator_states(&reset), vec![IndicatorState::Neutral]);
    }

    #[test]
    fn online_probe_reports_success() {
        let config = HemhubConfig::default();
        let (mut session, signal) = session_with(&config, Box::new(RecordingTransport::new()), false);

        // Environment comes back up before the probe reads the signal.
        session.check_connectivity();
        signal.set_online(true);
        session.run_until(1_000 * MS);

        let events = session.drain_events();
        assert!(indicator_states(&events).contains(&IndicatorState::Online));
        assert!(pushed_messages(&events).contains(&"Connected to WiFi".to_string()));
    }

    #[test]
    fn pushed_transition_restyles_indicator_without_probe() {
        let config = HemhubConfig::default();
        let (mut session, _) = session_with(&config, Box::new(RecordingTransport::new()), true);

        session.connectivity_changed(false);
        let events = session.drain_events();
        assert_eq!(indicator_states(&events), vec![IndicatorState::Offline]);
        assert!(pushed_messages(&events).is_empty());
        assert_eq!(session.pending_timers(), 0);
    }

    #[test]
    fn notification_walks_every_phase_once() {
        let config = HemhubConfig::default();
        let (mut session, _) = session_with(&config, Box::new(RecordingTransport::new()), true);

        session.refresh();
        session.run_to_idle();
        let events = session.drain_events();

        let phases: Vec<(u64, NotificationPhase)> = events
            .iter()
            .filter_map(|event| match &event.kind {
                UiEventKind::Notification { entry } => Some((event.timestamp_ns, entry.phase)),
                _ => None,
            })
            .collect();
        assert_eq!(
            phases.iter().map(|(_, p)| *p).collect::<Vec<_>>(),
            vec![
                NotificationPhase::Entering,
                NotificationPhase::Visible,
                NotificationPhase::Exiting
            ]
        );
        // Entering and visible share the push instant; exiting follows the
        // visible window.
        assert_eq!(phases[0].0, phases[1].0);
        assert_eq!(phases[2].0, phases[1].0 + 3_000 * MS);

        let removals: Vec<u64> = events
            .iter()
            .filter_map(|event| match &event.kind {
                UiEventKind::NotificationRemoved { .. } => Some(event.timestamp_ns),
                _ => None,
            })
            .collect();
        assert_eq!(removals, vec![phases[2].0 + 300 * MS]);
        assert_eq!(session.notifications(), 0);
    }

    #[test]
    fn live_cap_evicts_oldest_immediately() {
        let mut config = HemhubConfig::default();
        config.notifications.max_live = 2;
        let (mut session, _) = session_with(&config, Box::new(RecordingTransport::new()), true);

        session.refresh();
        session.refresh();
        session.refresh();
        assert_eq!(session.notifications(), 2);

        session.run_to_idle();
        let events = session.drain_events();
        let removed: Vec<NotificationId> = events
            .iter()
            .filter_map(|event| match &event.kind {
                UiEventKind::NotificationRemoved { id } => Some(*id),
                _ => None,
            })
            .collect();
        // Three entries, three removals, each exactly once.
        assert_eq!(removed.len(), 3);
        let mut unique = removed.clone();
        unique.sort_by_key(|id| id.0);
        unique.dedup();
        assert_eq!(unique.len(), 3);
        assert_eq!(session.notifications(), 0);
    }

    #[test]
    fn transport_failure_commits_nothing() {
        let config = HemhubConfig::default();
        let (mut session, _) = session_with(&config, Box::new(FailingTransport), true);

        session.toggle(DeviceId(1)).unwrap();
        session.run_until(500 * MS);

        assert!(!session.device(DeviceId(1)).unwrap().status);
        let events = session.drain_events();
        assert!(pushed_messages(&events).contains(&"Device 1 command failed".to_string()));
        // The pending affordance clears with the unchanged snapshot.
        assert!(events.iter().any(|e| matches!(
            &e.kind,
            UiEventKind::DeviceChanged { device } if device.id == DeviceId(1) && !device.status
        )));
    }

    #[test]
    fn sensor_cadence_ticks_on_interval() {
        let config = HemhubConfig::default();
        let (mut session, _) = session_with(&config, Box::new(RecordingTransport::new()), true);

        session.start();
        session.drain_events();

        session.run_until(15_000 * MS);
        let events = session.drain_events();
        let ticks: Vec<u64> = events
            .iter()
            .filter_map(|event| match &event.kind {
                UiEventKind::SensorsUpdated { .. } => Some(event.timestamp_ns),
                _ => None,
            })
            .collect();
        assert_eq!(ticks, vec![5_000 * MS, 10_000 * MS, 15_000 * MS]);

        let reading = session.reading();
        assert!((5..=19).contains(&reading.temperature));
        assert!((20..=99).contains(&reading.humidity));
    }

    #[test]
    fn refresh_regenerates_out_of_cadence() {
        let config = HemhubConfig::default();
        let (mut session, _) = session_with(&config, Box::new(RecordingTransport::new()), true);

        session.start();
        session.drain_events();

        session.run_until(2_000 * MS);
        session.refresh();
        session.run_until(5_000 * MS);

        let events = session.drain_events();
        let readings: Vec<u64> = events
            .iter()
            .filter_map(|event| match &event.kind {
                UiEventKind::SensorsUpdated { .. } => Some(event.timestamp_ns),
                _ => None,
            })
            .collect();
        // The out-of-cadence reading does not move the periodic schedule.
        assert_eq!(readings, vec![2_000 * MS, 5_000 * MS]);

        let spinner: Vec<(u64, bool)> = events
            .iter()
            .filter_map(|event| match &event.kind {
                UiEventKind::RefreshSpinner { spinning } => {
                    Some((event.timestamp_ns, *spinning))
                }
                _ => None,
            })
            .collect();
        assert_eq!(spinner, vec![(2_000 * MS, true), (2_500 * MS, false)]);
    }

    #[test]
    fn stop_sensor_feed_halts_the_cadence() {
        let config = HemhubConfig::default();
        let (mut session, _) = session_with(&config, Box::new(RecordingTransport::new()), true);

        session.start();
        session.run_until(5_000 * MS);
        session.stop_sensor_feed();
        session.run_until(30_000 * MS);

        let ticks = session
            .drain_events()
            .iter()
            .filter(|e| matches!(e.kind, UiEventKind::SensorsUpdated { .. }))
            .count();
        // Initial sync plus the single tick before the stop.
        assert_eq!(ticks, 2);
    }

    #[test]
    fn shutdown_cancels_everything_scheduled() {
        let config = HemhubConfig::default();
        let (mut session, _) = session_with(&config, Box::new(RecordingTransport::new()), true);

        session.start();
        session.toggle(DeviceId(1)).unwrap();
        session.check_connectivity();
        assert!(session.pending_timers() > 0);

        session.shutdown();
        assert_eq!(session.pending_timers(), 0);

        session.run_to_idle();
        assert!(!session.device(DeviceId(1)).unwrap().status);
    }

    #[test]
    fn metrics_track_commits_and_ticks() {
        let config = HemhubConfig::default();
        let metrics = MetricsRecorder::new();
        let signal = SharedConnectivity::new(true);
        let mut session = DashboardSession::new(
            &config,
            42,
            Box::new(RecordingTransport::new()),
            Box::new(signal),
            metrics.clone(),
        );

        session.start();
        session.toggle(DeviceId(1)).unwrap();
        session.run_until(5_000 * MS);

        let text = metrics.gather_metrics().unwrap();
        assert!(text.contains("hemhub_commands_committed_total 1"));
        assert!(text.contains("hemhub_sensor_ticks_total 1"));
    }
}
