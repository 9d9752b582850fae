use std::sync::Arc;

use crate::check::CpuUsageCheck;
use crate::config::PluginConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Plugin configuration (alert routing, timeouts).
    pub config: Arc<PluginConfig>,
    /// The CPU usage check invoked by `/v1/execute`.
    pub check: Arc<CpuUsageCheck>,
}
