//! Throughput calculation
//!
//! Turns two cumulative counter snapshots plus the measured elapsed time
//! between them into download/upload rates.

use crate::models::InterfaceCounters;

const BITS_PER_BYTE: f64 = 8.0;
const BITS_PER_MEGABIT: f64 = 1_000_000.0;

/// Download/upload rates over one interval, in megabits per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    pub download_mbps: f64,
    pub upload_mbps: f64,
}

/// Computes interval rates from two counter snapshots.
///
/// `elapsed_seconds` must be positive and must be the *measured* wall-clock
/// gap between the two counter reads, not the nominal interval; a tick that
/// overruns would otherwise inflate the reported rate.
///
/// A counter that went backwards (interface reset or wrap) clamps its delta
/// to zero for the tick rather than producing a negative rate.
pub fn compute_throughput(
    previous: InterfaceCounters,
    current: InterfaceCounters,
    elapsed_seconds: f64,
) -> Throughput {
    let rx_delta = current.rx_bytes.saturating_sub(previous.rx_bytes);
    let tx_delta = current.tx_bytes.saturating_sub(previous.tx_bytes);

    Throughput {
        download_mbps: rx_delta as f64 * BITS_PER_BYTE / (BITS_PER_MEGABIT * elapsed_seconds),
        upload_mbps: tx_delta as f64 * BITS_PER_BYTE / (BITS_PER_MEGABIT * elapsed_seconds),
    }
}
