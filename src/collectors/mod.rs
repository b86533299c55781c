//! External collaborators feeding the sampling engine
//!
//! - `counters`: cumulative interface counter reads and interface resolution
//! - `probe`: single bounded round-trip probes

pub mod counters;
pub mod probe;

pub use counters::{CounterSource, SystemCounterSource, resolve_interface};
pub use probe::{PingProbe, ProbeExecutor};
