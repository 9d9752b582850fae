//! Classification engine for CPU usage samples.
//!
//! Pure logic -- no host access. The caller is responsible for taking the
//! sample and passing it in.
//!
//! Classification is two separate lookups: utilization is banded into a
//! [`Tier`], then the tier is escalated into a [`Severity`]. The cut points
//! of the two steps line up today but are defined independently.

use crate::alert::{CheckResult, Severity, State};
use crate::error::CoreError;
use crate::metric_names::MESSAGE_PREFIX;
use crate::sample::UtilizationSample;

/// Tiers strictly above this escalate to [`Severity::Critical`].
const CRITICAL_ABOVE_TIER: Tier = Tier(3);

/// Tiers strictly above this (and not critical) escalate to [`Severity::Warning`].
const WARNING_ABOVE_TIER: Tier = Tier(2);

/// Ordinal utilization bucket, 1 (idle) through 4 (saturated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tier(u8);

impl Tier {
    pub fn get(self) -> u8 {
        self.0
    }
}

/// Lower bounds (inclusive) of tiers 2, 3 and 4, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageBands {
    tier2_from: f64,
    tier3_from: f64,
    tier4_from: f64,
}

impl Default for UsageBands {
    fn default() -> Self {
        Self {
            tier2_from: 50.0,
            tier3_from: 65.0,
            tier4_from: 90.0,
        }
    }
}

impl UsageBands {
    /// Build a band set, rejecting bounds that are not finite and strictly
    /// increasing.
    pub fn new(tier2_from: f64, tier3_from: f64, tier4_from: f64) -> Result<Self, CoreError> {
        let bounds = [tier2_from, tier3_from, tier4_from];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(CoreError::Validation(
                "usage band bounds must be finite".to_string(),
            ));
        }
        if !(tier2_from < tier3_from && tier3_from < tier4_from) {
            return Err(CoreError::Validation(format!(
                "usage band bounds must be strictly increasing, got {tier2_from}/{tier3_from}/{tier4_from}"
            )));
        }
        Ok(Self {
            tier2_from,
            tier3_from,
            tier4_from,
        })
    }

    pub fn tier2_from(&self) -> f64 {
        self.tier2_from
    }

    pub fn tier3_from(&self) -> f64 {
        self.tier3_from
    }

    pub fn tier4_from(&self) -> f64 {
        self.tier4_from
    }

    /// Band a utilization percentage. Bands are half-open with the lower
    /// bound inclusive, evaluated from the bottom up.
    pub fn tier_for(&self, percent_used: f64) -> Tier {
        if percent_used < self.tier2_from {
            Tier(1)
        } else if percent_used < self.tier3_from {
            Tier(2)
        } else if percent_used < self.tier4_from {
            Tier(3)
        } else {
            Tier(4)
        }
    }
}

/// Severity for a successful measurement in the given tier.
pub fn severity_for_tier(tier: Tier) -> Severity {
    if tier > CRITICAL_ABOVE_TIER {
        Severity::Critical
    } else if tier > WARNING_ABOVE_TIER {
        Severity::Warning
    } else {
        Severity::Info
    }
}

/// Human-readable result line, always two decimal places.
pub fn format_message(percent_used: f64) -> String {
    format!("{MESSAGE_PREFIX}{percent_used:.2}%")
}

/// Turn a sample into the result reported to the host.
///
/// An unavailable sample is always `FAILURE`/`ERROR`; the message still
/// carries whatever percentage was measured.
pub fn classify(sample: &UtilizationSample, bands: &UsageBands) -> CheckResult {
    let (state, severity) = if sample.available {
        let tier = bands.tier_for(sample.percent_used);
        (State::Success, severity_for_tier(tier))
    } else {
        (State::Failure, Severity::Error)
    };

    CheckResult::new(state, severity, format_message(sample.percent_used))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
