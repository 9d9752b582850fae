//! CPU utilization sampling.
//!
//! [`Sampler`] takes one [`UtilizationSample`] per call from a
//! [`CpuSource`]. The production source, [`SysinfoSource`], reads the host
//! through `sysinfo`; tests inject their own source so no real observation
//! window has to elapse.
//!
//! Only a failed CPU info read marks the sample unavailable. A failed usage
//! read contributes zero and is otherwise ignored.

use std::sync::Arc;
use std::time::Duration;

use machine_status_core::error::ProbeError;
use machine_status_core::sample::UtilizationSample;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Default observation window for a utilization read.
pub const DEFAULT_SAMPLE_WINDOW: Duration = Duration::from_secs(3);

/// Static identity of the host CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuInfo {
    pub brand: String,
    pub vendor_id: String,
    pub logical_cores: usize,
    pub frequency_mhz: u64,
}

/// A host metric backend the sampler can read from.
///
/// Implementations must be safe to call from several threads at once; each
/// call is an independent read with no shared mutable state.
pub trait CpuSource: Send + Sync {
    /// Read CPU identity info.
    fn cpu_info(&self) -> Result<CpuInfo, ProbeError>;

    /// Measure utilization over `window`, blocking for its full length.
    ///
    /// Returns one aggregate percentage, though callers must accept several.
    fn usage_percent(&self, window: Duration) -> Result<Vec<f64>, ProbeError>;
}

/// [`CpuSource`] backed by the `sysinfo` crate.
///
/// A fresh [`System`] is created per call so concurrent probes never share
/// refresh state.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoSource;

impl CpuSource for SysinfoSource {
    fn cpu_info(&self) -> Result<CpuInfo, ProbeError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(ProbeError::CpuInfoUnavailable(
                "platform is not supported by sysinfo".to_string(),
            ));
        }

        let system = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_frequency()),
        );
        let cpus = system.cpus();
        let first = cpus.first().ok_or_else(|| {
            ProbeError::CpuInfoUnavailable("no CPUs reported by the host".to_string())
        })?;

        Ok(CpuInfo {
            brand: first.brand().to_string(),
            vendor_id: first.vendor_id().to_string(),
            logical_cores: cpus.len(),
            frequency_mhz: first.frequency(),
        })
    }

    fn usage_percent(&self, window: Duration) -> Result<Vec<f64>, ProbeError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(ProbeError::UsageUnavailable(
                "platform is not supported by sysinfo".to_string(),
            ));
        }

        // Usage is the delta between two refreshes; sysinfo needs them at
        // least MINIMUM_CPU_UPDATE_INTERVAL apart.
        let mut system = System::new();
        system.refresh_cpu_usage();
        std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        system.refresh_cpu_usage();

        let usage = f64::from(system.global_cpu_usage());
        if !usage.is_finite() {
            return Err(ProbeError::UsageUnavailable(format!(
                "non-finite usage reading: {usage}"
            )));
        }

        Ok(vec![usage])
    }
}

/// Takes utilization samples from a [`CpuSource`] over a fixed window.
#[derive(Clone)]
pub struct Sampler {
    source: Arc<dyn CpuSource>,
    window: Duration,
}

impl Sampler {
    pub fn new(source: Arc<dyn CpuSource>, window: Duration) -> Self {
        Self { source, window }
    }

    /// Sampler over the host CPU through [`SysinfoSource`].
    pub fn system(window: Duration) -> Self {
        Self::new(Arc::new(SysinfoSource), window)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Take one sample. Blocks for the whole observation window.
    ///
    /// The info read always runs first and its failure does not skip the
    /// usage read.
    pub fn probe(&self) -> UtilizationSample {
        let available = match self.source.cpu_info() {
            Ok(info) => {
                tracing::debug!(
                    brand = %info.brand,
                    vendor_id = %info.vendor_id,
                    logical_cores = info.logical_cores,
                    frequency_mhz = info.frequency_mhz,
                    "CPU info read",
                );
                true
            }
            Err(_) => false,
        };

        // A failed usage read counts as zero and does not affect `available`.
        let percent_used = self
            .source
            .usage_percent(self.window)
            .map(|values| values.iter().sum())
            .unwrap_or(0.0);

        UtilizationSample::new(available, percent_used)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
