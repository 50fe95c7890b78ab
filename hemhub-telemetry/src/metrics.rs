//! Prometheus metrics for the dashboard session.

use prometheus::{Counter, Histogram, HistogramOpts, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: prometheus::Registry,
    pub commands_committed: prometheus::Counter,
    pub notifications_pushed: prometheus::Counter,
    pub sensor_ticks: prometheus::Counter,
    pub command_latency: prometheus::Histogram,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let commands_committed = Counter::new(
            "hemhub_commands_committed_total",
            "Total committed device commands",
        )
        .unwrap();
        let notifications_pushed = Counter::new(
            "hemhub_notifications_total",
            "Total notifications pushed to the board",
        )
        .unwrap();
        let sensor_ticks =
            Counter::new("hemhub_sensor_ticks_total", "Total sensor feed regenerations").unwrap();

        let command_latency = Histogram::with_opts(
            HistogramOpts::new(
                "hemhub_command_latency_ms",
                "Request-to-commit window per device command",
            )
            .buckets(vec![100.0, 250.0, 500.0, 1_000.0, 2_000.0]),
        )
        .unwrap();

        registry
            .register(Box::new(commands_committed.clone()))
            .unwrap();
        registry
            .register(Box::new(notifications_pushed.clone()))
            .unwrap();
        registry.register(Box::new(sensor_ticks.clone())).unwrap();
        registry
            .register(Box::new(command_latency.clone()))
            .unwrap();

        Self {
            registry,
            commands_committed,
            notifications_pushed,
            sensor_ticks,
            command_latency,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    pub fn inc_commands_committed(&self) {
        self.commands_committed.inc();
    }

    pub fn inc_notifications_pushed(&self) {
        self.notifications_pushed.inc();
    }

    pub fn inc_sensor_ticks(&self) {
        self.sensor_ticks.inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_gathered_text() {
        let metrics = MetricsRecorder::new();
        metrics.inc_commands_committed();
        metrics.inc_notifications_pushed();
        metrics.inc_sensor_ticks();
        metrics.command_latency.observe(500.0);

        let text = metrics.gather_metrics().unwrap();
        assert!(text.contains("hemhub_commands_committed_total 1"));
        assert!(text.contains("hemhub_notifications_total 1"));
        assert!(text.contains("hemhub_sensor_ticks_total 1"));
        assert!(text.contains("hemhub_command_latency_ms"));
    }
}
