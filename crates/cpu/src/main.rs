//! `machine-status-cpu` -- CPU usage health-check plugin.
//!
//! Serves the plugin protocol to a monitoring host. Each execute request
//! samples host CPU utilization over a fixed window and returns a severity
//! plus a human-readable message.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default     | Description                         |
//! |------------------------|----------|-------------|-------------------------------------|
//! | `PLUGIN_ADDR`          | no       | `127.0.0.1` | Bind address                        |
//! | `PLUGIN_PORT`          | no       | `9091`      | Bind port                           |
//! | `SAMPLE_WINDOW_SECS`   | no       | `3`         | Observation window per check        |
//! | `ALERT_TYPES`          | no       | `discord`   | Comma-separated notification routes |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`        | Transport timeout per request       |

use std::sync::Arc;

use machine_status_core::metric_names::PLUGIN_NAME;
use machine_status_core::thresholds::UsageBands;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use machine_status_cpu::check::CpuUsageCheck;
use machine_status_cpu::config::PluginConfig;
use machine_status_cpu::router::build_app_router;
use machine_status_cpu::sampler::Sampler;
use machine_status_cpu::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "machine_status_cpu=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = PluginConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    tracing::info!(
        addr = %config.addr,
        port = config.port,
        sample_window_secs = config.sample_window.as_secs(),
        alert_types = ?config.alert_types,
        "Loaded plugin configuration",
    );

    // --- Check ---
    let sampler = Sampler::system(config.sample_window);
    let check = CpuUsageCheck::new(sampler, UsageBands::default());

    let addr = config.bind_addr();
    let state = AppState {
        config: Arc::new(config),
        check: Arc::new(check),
    };
    let app = build_app_router(state);

    // --- Start server ---
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(%addr, error = %e, "Failed to bind to address");
            std::process::exit(1);
        });
    tracing::info!(%addr, plugin = PLUGIN_NAME, "Plugin listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
