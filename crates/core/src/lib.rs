//! `machine-status-core` -- pure domain logic for the CPU usage check.
//!
//! Nothing in this crate touches the host or the network, so the
//! classification rules can be tested in isolation.

pub mod alert;
pub mod error;
pub mod metric_names;
pub mod sample;
pub mod thresholds;
