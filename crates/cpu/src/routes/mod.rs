pub mod health;
pub mod plugin;

use axum::Router;

use crate::state::AppState;

/// Plugin protocol routes, mounted under `/v1`.
pub fn plugin_routes() -> Router<AppState> {
    plugin::router()
}
