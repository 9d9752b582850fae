//! Well-known identifiers for the CPU usage check.
//!
//! These are static per deployment and shared by the check runner, the
//! structured log events, and the plugin wire protocol.

/// Name the plugin registers under with the monitoring host.
pub const PLUGIN_NAME: &str = "machine-status-cpu";

/// Function name reported in every execute response.
///
/// Also used as the field key on the check's structured log events.
pub const METHOD_NAME: &str = "GetMachineCPUUsage";

/// Resource type reported in every execute response.
pub const RESOURCE_TYPE_CPU: &str = "cpu";

/// Fixed description logged when CPU identity info cannot be read.
pub const CPU_INFO_FAILED: &str = "Getting CPU info has failed.";

/// Prefix of the human-readable result message.
pub const MESSAGE_PREFIX: &str = "Total CPU Usage: ";
