//! The sampling engine
//!
//! - `scheduler`: the drift-corrected per-tick loop
//! - `throughput`: counter deltas to download/upload rates
//! - `loss`: cumulative probe-loss accounting
//! - `errors`: fatal error taxonomy for a run

pub mod errors;
pub mod loss;
pub mod scheduler;
pub mod throughput;

pub use errors::MonitorError;
pub use loss::LossTracker;
pub use scheduler::{
    PROBE_TIMEOUT, RunOutcome, SampleScheduler, SchedulerConfig, SchedulerState,
};
pub use throughput::{Throughput, compute_throughput};
