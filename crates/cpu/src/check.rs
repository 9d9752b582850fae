//! The `GetMachineCPUUsage` check: probe, classify, log.

use machine_status_core::alert::CheckResult;
use machine_status_core::metric_names::{CPU_INFO_FAILED, METHOD_NAME, PLUGIN_NAME};
use machine_status_core::thresholds::{classify, UsageBands};

use crate::sampler::Sampler;

/// One probe-and-classify pass per [`run`](CpuUsageCheck::run) call.
///
/// Holds no mutable state, so a single instance can serve overlapping
/// invocations.
#[derive(Clone)]
pub struct CpuUsageCheck {
    sampler: Sampler,
    bands: UsageBands,
}

impl CpuUsageCheck {
    pub fn new(sampler: Sampler, bands: UsageBands) -> Self {
        Self { sampler, bands }
    }

    /// Run the check. Blocks for the sampler's observation window.
    ///
    /// Never fails: an unreadable CPU is reported through the result's
    /// state and severity.
    pub fn run(&self) -> CheckResult {
        let sample = self.sampler.probe();

        if !sample.available {
            tracing::error!(check = METHOD_NAME, plugin = PLUGIN_NAME, "{CPU_INFO_FAILED}");
        }

        let result = classify(&sample, &self.bands);

        tracing::info!(
            check = METHOD_NAME,
            plugin = PLUGIN_NAME,
            state = ?result.state(),
            severity = ?result.severity(),
            "{}",
            result.message(),
        );

        result
    }
}
