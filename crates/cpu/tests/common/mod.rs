#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use machine_status_core::alert::AlertType;
use machine_status_core::error::ProbeError;
use machine_status_core::thresholds::UsageBands;
use tower::ServiceExt;

use machine_status_cpu::check::CpuUsageCheck;
use machine_status_cpu::config::PluginConfig;
use machine_status_cpu::router::build_app_router;
use machine_status_cpu::sampler::{CpuInfo, CpuSource, Sampler};
use machine_status_cpu::state::AppState;

/// Deterministic [`CpuSource`] that returns canned readings instantly.
pub struct FixedSource {
    pub info_ok: bool,
    pub usage: Option<Vec<f64>>,
}

impl FixedSource {
    pub fn reading(percent: f64) -> Self {
        Self {
            info_ok: true,
            usage: Some(vec![percent]),
        }
    }

    pub fn info_failure(percent: f64) -> Self {
        Self {
            info_ok: false,
            usage: Some(vec![percent]),
        }
    }

    pub fn usage_failure() -> Self {
        Self {
            info_ok: true,
            usage: None,
        }
    }
}

impl CpuSource for FixedSource {
    fn cpu_info(&self) -> Result<CpuInfo, ProbeError> {
        if self.info_ok {
            Ok(CpuInfo {
                brand: "Fixed CPU".to_string(),
                vendor_id: "FixedVendor".to_string(),
                logical_cores: 8,
                frequency_mhz: 3000,
            })
        } else {
            Err(ProbeError::CpuInfoUnavailable("fixed failure".to_string()))
        }
    }

    fn usage_percent(&self, _window: Duration) -> Result<Vec<f64>, ProbeError> {
        self.usage
            .clone()
            .ok_or_else(|| ProbeError::UsageUnavailable("fixed failure".to_string()))
    }
}

/// [`CpuSource`] whose info read panics, standing in for a crashed probe.
pub struct PanickingSource;

impl CpuSource for PanickingSource {
    fn cpu_info(&self) -> Result<CpuInfo, ProbeError> {
        panic!("CPU info read panicked");
    }

    fn usage_percent(&self, _window: Duration) -> Result<Vec<f64>, ProbeError> {
        Ok(vec![0.0])
    }
}

/// A check over `source` with production bands and no real window.
pub fn check_with<S: CpuSource + 'static>(source: S) -> CpuUsageCheck {
    CpuUsageCheck::new(
        Sampler::new(Arc::new(source), Duration::ZERO),
        UsageBands::default(),
    )
}

/// Build a test `PluginConfig` with the default routing tag.
pub fn test_config() -> PluginConfig {
    PluginConfig {
        port: 0,
        ..PluginConfig::default()
    }
}

/// Build the full application router, mirroring `main.rs`, over `source`.
pub fn build_test_app<S: CpuSource + 'static>(source: S) -> Router {
    build_test_app_with_alerts(source, vec![AlertType::Discord])
}

pub fn build_test_app_with_alerts<S: CpuSource + 'static>(
    source: S,
    alert_types: Vec<AlertType>,
) -> Router {
    let config = PluginConfig {
        alert_types,
        ..test_config()
    };
    let state = AppState {
        config: Arc::new(config),
        check: Arc::new(check_with(source)),
    };
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
