// file: src/utils/telemetry.rs
// description: timing of the one-shot corpus load

use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::info;

/// Times one named operation and logs its throughput when finished.
pub struct OperationTimer {
    operation: &'static str,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &'static str) -> Self {
        info!("Starting operation: {}", operation);
        Self {
            operation,
            start: Instant::now(),
        }
    }

    pub fn finish_with_count(self, records: usize) -> LoadMetrics {
        let metrics = LoadMetrics::new(records, self.start.elapsed());
        info!("Completed operation: {} - {}", self.operation, metrics.format());
        metrics
    }
}

/// How many records a load produced and how long it took.
#[derive(Debug, Clone, Serialize)]
pub struct LoadMetrics {
    pub records: usize,
    pub duration_ms: u64,
    pub records_per_sec: f64,
}

impl LoadMetrics {
    pub fn new(records: usize, duration: Duration) -> Self {
        let secs = duration.as_secs_f64();
        Self {
            records,
            duration_ms: duration.as_millis() as u64,
            records_per_sec: if secs > 0.0 { records as f64 / secs } else { 0.0 },
        }
    }

    pub fn format(&self) -> String {
        format!(
            "{} records in {}ms ({:.0} records/sec)",
            self.records, self.duration_ms, self.records_per_sec
        )
    }
}
