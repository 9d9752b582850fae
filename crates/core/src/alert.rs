//! Result types returned to the monitoring host.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Whether the measurement pipeline itself completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    Success,
    Failure,
}

/// Reported urgency level, ordered from least to most urgent.
///
/// `Info` and `Error` follow the operational state of the measurement;
/// `Warning` and `Critical` follow the utilization tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

/// Notification channel the host should route a result to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertType {
    Discord,
    Email,
    Telegram,
    Slack,
    Pagerduty,
}

impl FromStr for AlertType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discord" => Ok(Self::Discord),
            "email" => Ok(Self::Email),
            "telegram" => Ok(Self::Telegram),
            "slack" => Ok(Self::Slack),
            "pagerduty" => Ok(Self::Pagerduty),
            other => Err(CoreError::Validation(format!(
                "unknown alert type '{other}'"
            ))),
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Discord => "discord",
            Self::Email => "email",
            Self::Telegram => "telegram",
            Self::Slack => "slack",
            Self::Pagerduty => "pagerduty",
        };
        f.write_str(name)
    }
}

/// Outcome of one probe-and-classify pass.
///
/// Fields are private so a result cannot be altered after classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    state: State,
    severity: Severity,
    message: String,
}

impl CheckResult {
    pub(crate) fn new(state: State, severity: Severity, message: String) -> Self {
        Self {
            state,
            severity,
            message,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
