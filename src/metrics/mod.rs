//! Metrics collection.
//!
//! This module provides:
//! - Per-operation usage tracking (invocations, latency, success rate)
//! - [`CorpusMetrics`]: descriptive statistics over a synthetic corpus
//! - [`EvaluationReport`]: detector recall against corpus labels
//!
//! # Example
//!
//! ```
//! use bias_lens::metrics::{MetricsCollector, MetricEvent};
//!
//! let metrics = MetricsCollector::new();
//! metrics.record(MetricEvent::new("detect", 12, true));
//! metrics.record(MetricEvent::new("detect", 18, true));
//! metrics.record(MetricEvent::new("correct", 30, false));
//!
//! let summary = metrics.summary();
//! assert_eq!(summary.total_invocations, 3);
//! // 2 out of 3 succeeded = ~66.7%
//! assert!((summary.overall_success_rate - 0.666).abs() < 0.01);
//! assert!(summary.by_operation.contains_key("detect"));
//! ```

// Allow intentional numeric casts for metrics calculations
#![allow(clippy::cast_precision_loss)]

mod corpus;

pub use corpus::{CorpusMetrics, EvaluationReport, KindRecall};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::RwLock;
use std::time::Duration;

/// A single recorded service invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricEvent {
    /// Operation that was invoked.
    pub operation: String,
    /// Latency in milliseconds.
    pub latency_ms: u64,
    /// Whether the invocation succeeded.
    pub success: bool,
    /// Timestamp of the event (Unix epoch seconds).
    pub timestamp: u64,
}

impl MetricEvent {
    /// Create a new metric event stamped with the current time.
    #[must_use]
    pub fn new(operation: impl Into<String>, latency_ms: u64, success: bool) -> Self {
        Self {
            operation: operation.into(),
            latency_ms,
            success,
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }
}

/// Summary statistics for one operation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OperationSummary {
    /// Total invocations.
    pub total_invocations: u64,
    /// Successful invocations.
    pub successful: u64,
    /// Failed invocations.
    pub failed: u64,
    /// Average latency in milliseconds.
    pub avg_latency_ms: f64,
    /// Minimum latency in milliseconds.
    pub min_latency_ms: u64,
    /// Maximum latency in milliseconds.
    pub max_latency_ms: u64,
    /// Success rate (0.0-1.0).
    pub success_rate: f64,
}

/// Overall usage summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageSummary {
    /// Total invocations across all operations.
    pub total_invocations: u64,
    /// Overall success rate; 1.0 when nothing has run.
    pub overall_success_rate: f64,
    /// Per-operation summaries, keyed by operation name.
    pub by_operation: BTreeMap<String, OperationSummary>,
}

/// Thread-safe usage collector.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    events: RwLock<Vec<MetricEvent>>,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a metric event.
    pub fn record(&self, event: MetricEvent) {
        match self.events.write() {
            Ok(mut events) => events.push(event),
            Err(poison_error) => {
                tracing::error!(
                    operation = %event.operation,
                    error = %poison_error,
                    "Failed to record metric event: RwLock poisoned"
                );
            }
        }
    }

    /// Get summary statistics.
    #[must_use]
    pub fn summary(&self) -> UsageSummary {
        let events = match self.events.read() {
            Ok(e) => e.clone(),
            Err(poison_error) => {
                tracing::warn!(
                    error = %poison_error,
                    "Reading events from poisoned lock, using recovered data"
                );
                poison_error.into_inner().clone()
            }
        };

        let mut grouped: BTreeMap<String, Vec<&MetricEvent>> = BTreeMap::new();
        for event in &events {
            grouped.entry(event.operation.clone()).or_default().push(event);
        }

        let by_operation = grouped
            .into_iter()
            .map(|(operation, op_events)| (operation, summarize(&op_events)))
            .collect();

        let total_invocations = events.len() as u64;
        let total_successful = events.iter().filter(|e| e.success).count() as u64;
        let overall_success_rate = if total_invocations > 0 {
            total_successful as f64 / total_invocations as f64
        } else {
            1.0
        };

        UsageSummary {
            total_invocations,
            overall_success_rate,
            by_operation,
        }
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
#[must_use]
pub fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn summarize(events: &[&MetricEvent]) -> OperationSummary {
    let total = events.len() as u64;
    let successful = events.iter().filter(|e| e.success).count() as u64;
    let latencies: Vec<u64> = events.iter().map(|e| e.latency_ms).collect();

    let avg_latency_ms = if latencies.is_empty() {
        0.0
    } else {
        latencies.iter().sum::<u64>() as f64 / latencies.len() as f64
    };
    let success_rate = if total > 0 {
        successful as f64 / total as f64
    } else {
        0.0
    };

    OperationSummary {
        total_invocations: total,
        successful,
        failed: total - successful,
        avg_latency_ms,
        min_latency_ms: latencies.iter().copied().min().unwrap_or(0),
        max_latency_ms: latencies.iter().copied().max().unwrap_or(0),
        success_rate,
    }
}
