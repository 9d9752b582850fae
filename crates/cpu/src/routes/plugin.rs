//! Handlers for the plugin protocol spoken with the monitoring host.
//!
//! - `GET /verify` answers with the plugin name so the host can confirm
//!   it reached the right plugin.
//! - `POST /execute` runs one CPU usage check and returns its result.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::error::{AppError, AppResult};
use crate::protocol::{ExecuteRequest, ExecuteResponse, VerifyInfo};
use crate::state::AppState;

/// GET /v1/verify
async fn verify() -> Json<VerifyInfo> {
    Json(VerifyInfo::default())
}

/// POST /v1/execute
///
/// The body is optional. The probe blocks for the whole observation window,
/// so it runs on the blocking pool.
async fn execute(State(state): State<AppState>, body: Bytes) -> AppResult<Json<ExecuteResponse>> {
    let request = parse_request(&body)?;
    tracing::debug!(
        execute_info_keys = request.execute_info.len(),
        option_keys = request.options.len(),
        "Execute requested",
    );

    let check = Arc::clone(&state.check);
    let result = tokio::task::spawn_blocking(move || check.run())
        .await
        .map_err(|e| AppError::InternalError(format!("CPU usage check did not complete: {e}")))?;

    Ok(Json(ExecuteResponse::new(&result, &state.config.alert_types)))
}

/// Decode an execute request, treating an empty body as no metadata.
fn parse_request(body: &[u8]) -> AppResult<ExecuteRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ExecuteRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid execute request: {e}")))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/verify", get(verify))
        .route("/execute", post(execute))
}
