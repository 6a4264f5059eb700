//! Runtime configuration.
//!
//! Resolved once at startup and read-only afterwards.
mod env;
mod error;

pub use env::{ITEM_TIMEOUT_VAR, PID_FILE_PATH_VAR};
pub use error::{Error, Result};

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for the process inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the marker files (`PidFilePath`).
    pid_file_path: Option<PathBuf>,
    /// Upper bound on a single discovery call. `None` means no limit.
    item_timeout: Option<Duration>,
}

impl Config {
    /// Creates a configuration for the given marker directory without a timeout.
    pub fn new(pid_file_path: impl Into<PathBuf>) -> Self {
        Self {
            pid_file_path: Some(pid_file_path.into()),
            item_timeout: None,
        }
    }

    /// Sets the per-item timeout. A zero duration disables the timeout.
    pub fn with_item_timeout(mut self, timeout: Duration) -> Self {
        self.item_timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    pub fn pid_file_path(&self) -> Option<&Path> {
        self.pid_file_path.as_deref()
    }

    pub fn item_timeout(&self) -> Option<Duration> {
        self.item_timeout
    }
}
