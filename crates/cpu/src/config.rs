use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use machine_status_core::alert::AlertType;
use machine_status_core::error::CoreError;

use crate::sampler::DEFAULT_SAMPLE_WINDOW;

const DEFAULT_ADDR: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 9091;
const DEFAULT_ALERT_TYPES: &str = "discord";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors raised while loading [`PluginConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Plugin configuration loaded from environment variables.
///
/// All fields have defaults matching a local monitoring host.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Bind address (default: `127.0.0.1`).
    pub addr: IpAddr,
    /// Bind port (default: `9091`).
    pub port: u16,
    /// Observation window for each usage read (default: 3 seconds).
    pub sample_window: Duration,
    /// Routing tags attached to every result (default: `discord`).
    pub alert_types: Vec<AlertType>,
    /// Transport timeout for a whole request, in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            addr: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            sample_window: DEFAULT_SAMPLE_WINDOW,
            alert_types: vec![AlertType::Discord],
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl PluginConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `PLUGIN_ADDR`          | `127.0.0.1` |
    /// | `PLUGIN_PORT`          | `9091`      |
    /// | `SAMPLE_WINDOW_SECS`   | `3`         |
    /// | `ALERT_TYPES`          | `discord`   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let addr_raw = var("PLUGIN_ADDR", DEFAULT_ADDR);
        let addr: IpAddr = addr_raw.trim().parse().map_err(|e| ConfigError::Invalid {
            var: "PLUGIN_ADDR",
            value: addr_raw.clone(),
            reason: format!("{e}"),
        })?;

        let port_raw = var("PLUGIN_PORT", &DEFAULT_PORT.to_string());
        let port: u16 = port_raw.trim().parse().map_err(|e| ConfigError::Invalid {
            var: "PLUGIN_PORT",
            value: port_raw.clone(),
            reason: format!("{e}"),
        })?;

        let window_raw = var(
            "SAMPLE_WINDOW_SECS",
            &DEFAULT_SAMPLE_WINDOW.as_secs().to_string(),
        );
        let window_secs: u64 = window_raw.trim().parse().map_err(|e| ConfigError::Invalid {
            var: "SAMPLE_WINDOW_SECS",
            value: window_raw.clone(),
            reason: format!("{e}"),
        })?;
        if window_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "SAMPLE_WINDOW_SECS",
                value: window_raw,
                reason: "must be greater than zero".to_string(),
            });
        }

        let alert_types = parse_alert_types(&var("ALERT_TYPES", DEFAULT_ALERT_TYPES))?;

        let timeout_raw = var(
            "REQUEST_TIMEOUT_SECS",
            &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
        );
        let request_timeout_secs: u64 =
            timeout_raw.trim().parse().map_err(|e| ConfigError::Invalid {
                var: "REQUEST_TIMEOUT_SECS",
                value: timeout_raw.clone(),
                reason: format!("{e}"),
            })?;
        // The timeout must outlast a full observation window, or no execute
        // call could ever return a result.
        if request_timeout_secs <= window_secs {
            return Err(ConfigError::Invalid {
                var: "REQUEST_TIMEOUT_SECS",
                value: timeout_raw,
                reason: format!("must be greater than SAMPLE_WINDOW_SECS ({window_secs})"),
            });
        }

        Ok(Self {
            addr,
            port,
            sample_window: Duration::from_secs(window_secs),
            alert_types,
            request_timeout_secs,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

/// Parse a comma-separated list of alert types, skipping empty entries.
fn parse_alert_types(raw: &str) -> Result<Vec<AlertType>, ConfigError> {
    let alert_types = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<AlertType>, CoreError>>()?;

    if alert_types.is_empty() {
        return Err(CoreError::Validation("ALERT_TYPES must name at least one channel".into()).into());
    }

    Ok(alert_types)
}
