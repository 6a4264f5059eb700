//! Item keys exposed to the monitoring agent and their handlers.
//!
//! Only [`DISCOVERY_KEY`] does real work. The per-process keys are registered
//! so the agent sees the full item list, but report
//! [`Error::NotImplemented`] when invoked.
mod error;
mod registry;

pub use error::{Error, Result};
pub use registry::{Handler, Metric, Registry};

/// Discovery of tracked processes.
pub const DISCOVERY_KEY: &str = "custom.proc.discovery";
/// CPU utilization of a tracked process.
pub const CPU_UTIL_KEY: &str = "custom.proc.cpu.util";
/// Memory usage of a tracked process.
pub const MEMORY_KEY: &str = "custom.proc.mem";
/// Subprocess count of a tracked process.
pub const SUBPROCESSES_KEY: &str = "custom.proc.subs";
/// Thread count of a tracked process.
pub const THREADS_KEY: &str = "custom.proc.threads";
/// Start time of a tracked process.
pub const START_TIME_KEY: &str = "custom.proc.starttime";

/// Parameter the agent uses when testing the per-process keys.
pub const TEST_PARAMETER: &str = "systemd";

/// Keys registered without an implementation.
pub const PLACEHOLDER_KEYS: [&str; 5] = [
    CPU_UTIL_KEY,
    MEMORY_KEY,
    SUBPROCESSES_KEY,
    THREADS_KEY,
    START_TIME_KEY,
];
