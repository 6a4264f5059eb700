use crate::config::Config;
use crate::discovery::DiscoveryDocument;

use super::{Error, InventorySnapshot, Result, scan_directory};

/// Produces discovery documents for the configured marker directory.
///
/// The service holds only the read-only [`Config`]; every call scans the
/// directory afresh, so one instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct InventoryService {
    config: Config,
}

impl InventoryService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scans the configured marker directory.
    ///
    /// # Errors
    ///
    /// - [`Error::Unconfigured`] if no directory is configured or the path is empty.
    /// - Any error of [`scan_directory`]. A directory that cannot be opened is
    ///   reported as [`Error::DirectoryUnreadable`], never as an empty inventory.
    pub fn snapshot(&self) -> Result<InventorySnapshot> {
        let path = self
            .config
            .pid_file_path()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(Error::Unconfigured)?;
        log::debug!("Scanning marker directory {}", path.display());

        scan_directory(path, self.config.item_timeout())
    }

    /// Scans the configured marker directory and encodes the result.
    ///
    /// # Errors
    ///
    /// Same as [`InventoryService::snapshot`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use proc_inventory::config::Config;
    /// use proc_inventory::inventory::InventoryService;
    ///
    /// let service = InventoryService::new(Config::new("/run/markers"));
    /// let document = service.discover().unwrap();
    /// println!("{}", document.to_json().unwrap());
    /// ```
    pub fn discover(&self) -> Result<DiscoveryDocument> {
        let snapshot = self.snapshot()?;
        Ok(DiscoveryDocument::from_snapshot(&snapshot))
    }
}
