//! Per-tick measurement types
//!
//! This module contains the counter snapshot and assembled sample types that
//! flow from the collectors through the sampling engine to the reporter.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single cumulative counter snapshot for one interface, captured at one
/// instant. Immutable once captured; each tick supersedes the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceCounters {
    /// Total bytes received since interface startup
    pub rx_bytes: u64,
    /// Total bytes sent since interface startup
    pub tx_bytes: u64,
}

/// One fully assembled measurement tick, produced by the scheduler and
/// consumed immediately by the reporter. No history is retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// Local timestamp of when the sample was assembled
    pub timestamp: DateTime<Local>,
    /// Download rate over the interval, in megabits per second
    pub download_mbps: f64,
    /// Upload rate over the interval, in megabits per second
    pub upload_mbps: f64,
    /// Probe round-trip time in milliseconds, absent when the probe got no response
    pub latency_ms: Option<f64>,
    /// Cumulative share of probes lost across the whole run, 0-100
    pub loss_pct: f64,
}

impl Sample {
    /// Whether the probe for this tick received a response.
    pub fn probe_responded(&self) -> bool {
        self.latency_ms.is_some()
    }
}
