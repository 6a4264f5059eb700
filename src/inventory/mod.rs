//! Process inventory built from a directory of marker files.
//!
//! [`scan_directory`] turns one directory into an [`InventorySnapshot`];
//! [`InventoryService`] ties that to the configured directory and timeout and
//! produces the discovery document handed to the monitoring agent.
mod error;
mod scanner;
mod service;

pub use error::{EntryError, Error, Result};
pub use scanner::scan_directory;
pub use service::InventoryService;

use crate::process::ProcessRecord;

/// The processes found by one scan, in directory enumeration order.
///
/// A snapshot is built fresh for every discovery call and is never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySnapshot {
    records: Vec<ProcessRecord>,
}

impl InventorySnapshot {
    pub fn new(records: Vec<ProcessRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ProcessRecord] {
        self.records.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProcessRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a InventorySnapshot {
    type Item = &'a ProcessRecord;
    type IntoIter = std::slice::Iter<'a, ProcessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for InventorySnapshot {
    type Item = ProcessRecord;
    type IntoIter = std::vec::IntoIter<ProcessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
