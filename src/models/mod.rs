//! Data model for the sampling loop

pub mod sample;

pub use sample::{InterfaceCounters, Sample};
