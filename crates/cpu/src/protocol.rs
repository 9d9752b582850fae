//! Wire types exchanged with the monitoring host.

use machine_status_core::alert::{AlertType, CheckResult, Severity, State};
use machine_status_core::metric_names::{METHOD_NAME, PLUGIN_NAME, RESOURCE_TYPE_CPU};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /v1/execute`.
///
/// Both maps are host metadata passed through opaquely; the check never
/// reads them.
#[derive(Debug, Default, Deserialize)]
pub struct ExecuteRequest {
    #[serde(default)]
    pub execute_info: Map<String, Value>,
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// Response to `POST /v1/execute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteResponse {
    pub func_name: String,
    pub state: State,
    pub severity: Severity,
    pub message: String,
    pub alert_types: Vec<AlertType>,
    pub resource_type: String,
}

impl ExecuteResponse {
    pub fn new(result: &CheckResult, alert_types: &[AlertType]) -> Self {
        Self {
            func_name: METHOD_NAME.to_string(),
            state: result.state(),
            severity: result.severity(),
            message: result.message().to_string(),
            alert_types: alert_types.to_vec(),
            resource_type: RESOURCE_TYPE_CPU.to_string(),
        }
    }
}

/// Response to `GET /v1/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyInfo {
    pub verify_msg: String,
}

impl Default for VerifyInfo {
    fn default() -> Self {
        Self {
            verify_msg: PLUGIN_NAME.to_string(),
        }
    }
}
