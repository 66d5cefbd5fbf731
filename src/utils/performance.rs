//! Performance monitoring utilities
//!
//! Layout runs on every resize notification, so each recomputation should
//! finish well inside one animation frame. This module keeps per-operation
//! timings and counts recomputations that blew the frame budget.

use serde::Serialize;
use std::collections::HashMap;

/// One frame at 60 Hz
pub const FRAME_BUDGET_MS: f64 = 16.0;

/// Aggregated timings for one operation
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationStats {
    pub operation: String,
    pub samples: usize,
    pub average_ms: f64,
    pub max_ms: f64,
    pub over_budget: usize,
}

/// Running totals for one operation; constant size however many samples
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Aggregate {
    samples: usize,
    total_ms: f64,
    max_ms: f64,
    over_budget: usize,
}

/// Performance monitor for measuring operation times
#[derive(Debug, Default)]
pub struct PerformanceMonitor {
    measurements: HashMap<String, Aggregate>,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_measurement(&mut self, operation: &str, duration_ms: f64) {
        let over_budget = duration_ms > FRAME_BUDGET_MS;
        if over_budget {
            log::warn!("{} took {:.2}ms (frame budget {}ms)", operation, duration_ms, FRAME_BUDGET_MS);
        }

        let entry = self.measurements.entry(operation.to_string()).or_default();
        entry.samples += 1;
        entry.total_ms += duration_ms;
        entry.max_ms = entry.max_ms.max(duration_ms);
        if over_budget {
            entry.over_budget += 1;
        }
    }

    pub fn get_average_time(&self, operation: &str) -> Option<f64> {
        self.measurements.get(operation).map(average_ms)
    }

    /// Number of operations tracked
    pub fn operation_count(&self) -> usize {
        self.measurements.len()
    }

    /// Stats for every recorded operation, sorted by name
    pub fn summary(&self) -> Vec<OperationStats> {
        let mut stats: Vec<OperationStats> = self
            .measurements
            .iter()
            .map(|(operation, aggregate)| OperationStats {
                operation: operation.clone(),
                samples: aggregate.samples,
                average_ms: average_ms(aggregate),
                max_ms: aggregate.max_ms,
                over_budget: aggregate.over_budget,
            })
            .collect();
        stats.sort_by(|a, b| a.operation.cmp(&b.operation));
        stats
    }

    pub fn clear(&mut self) {
        self.measurements.clear();
    }
}

fn average_ms(aggregate: &Aggregate) -> f64 {
    if aggregate.samples == 0 {
        0.0
    } else {
        aggregate.total_ms / aggregate.samples as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_and_missing() {
        let mut monitor = PerformanceMonitor::new();
        assert_eq!(monitor.get_average_time("computeLayout"), None);
        monitor.record_measurement("computeLayout", 1.0);
        monitor.record_measurement("computeLayout", 3.0);
        assert_eq!(monitor.get_average_time("computeLayout"), Some(2.0));
    }

    #[test]
    fn test_summary_counts_over_budget() {
        let mut monitor = PerformanceMonitor::new();
        monitor.record_measurement("plan", 0.5);
        monitor.record_measurement("layout", 20.0);
        monitor.record_measurement("layout", 2.0);

        let summary = monitor.summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].operation, "layout");
        assert_eq!(summary[0].samples, 2);
        assert_eq!(summary[0].over_budget, 1);
        assert_eq!(summary[0].max_ms, 20.0);
        assert_eq!(summary[1].over_budget, 0);

        monitor.clear();
        assert!(monitor.summary().is_empty());
    }

    #[test]
    fn test_storage_stays_flat_over_a_long_session() {
        let mut monitor = PerformanceMonitor::new();
        for frame in 0..10_000 {
            monitor.record_measurement("computeLayout", (frame % 4) as f64);
            monitor.record_measurement("calculatePagination", 1.0);
        }

        assert_eq!(monitor.operation_count(), 2);
        let summary = monitor.summary();
        assert_eq!(summary[0].operation, "calculatePagination");
        assert_eq!(summary[0].samples, 10_000);
        assert_eq!(summary[1].samples, 10_000);
        assert_eq!(summary[1].average_ms, 1.5);
        assert_eq!(summary[1].max_ms, 3.0);
    }
}
