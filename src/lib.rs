//! Link quality monitor library
//!
//! Samples a network interface's cumulative traffic counters and a round-trip
//! probe on a fixed cadence, producing one [`models::Sample`] per tick with
//! throughput, latency, and cumulative packet-loss figures.
//!
//! ## Module Organization
//!
//! - `cli`: Command-line argument surface
//! - `collectors`: External collaborators (counter source, probe executor)
//! - `models`: Per-tick data model
//! - `sampler`: The drift-corrected sampling engine
//! - `output`: Sample rendering for the operator

pub mod cli;
pub mod collectors;
pub mod models;
pub mod output;
pub mod sampler;
