//! `machine-status-cpu` plugin library.
//!
//! Exposes the sampler, check runner, configuration and HTTP routes so
//! integration tests and the binary entrypoint can both access them.

pub mod check;
pub mod config;
pub mod error;
pub mod protocol;
pub mod router;
pub mod routes;
pub mod sampler;
pub mod state;
