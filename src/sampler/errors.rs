//! Error types for the sampling run

use thiserror::Error;

/// Fatal conditions for a sampling run.
///
/// A probe with no response is deliberately not represented here: it is a
/// per-tick measurement outcome, recorded as loss, and the loop continues.
/// Every variant below terminates the process with a non-zero exit.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Interface enumeration produced nothing eligible for monitoring.
    #[error("no usable network interface found")]
    NoInterfaceAvailable,

    /// An explicitly requested interface is absent from the counter source.
    #[error("interface '{interface}' not found")]
    InterfaceNotFound {
        /// Name of the interface that was requested
        interface: String,
    },

    /// The counter source failed mid-run. Counter continuity cannot be
    /// guaranteed across the gap, so the run is not resumed.
    #[error("counter source unavailable for interface '{interface}': {message}")]
    CounterSourceUnavailable {
        /// Interface being monitored when the failure occurred
        interface: String,
        /// Underlying failure description
        message: String,
    },
}
