/// Domain-level errors raised while validating check configuration.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Failures reported by a CPU metric source.
///
/// These never reach the monitoring host as faults. The sampler folds them
/// into the [`UtilizationSample`](crate::sample::UtilizationSample) it returns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// CPU identity information could not be read from the host.
    #[error("CPU info unavailable: {0}")]
    CpuInfoUnavailable(String),

    /// The utilization read over the observation window failed.
    #[error("CPU usage unavailable: {0}")]
    UsageUnavailable(String),
}
