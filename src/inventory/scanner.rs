use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::ResultOkLogExt;
use crate::fsutil;
use crate::marker::{self, MARKER_READ_LIMIT};
use crate::process::ProcessRecord;

use super::{EntryError, Error, InventorySnapshot, Result};

/// Scans a marker directory and parses every readable marker file in it.
///
/// Entries are visited in the order the filesystem lists them. Entries that
/// cannot be opened, are not regular files, or fail to parse are logged and
/// skipped; they never fail the scan.
///
/// # Arguments
///
/// * `path` - The marker directory.
/// * `timeout` - Upper bound on the scan duration, checked before each entry.
///
/// # Errors
///
/// - [`Error::DirectoryUnreadable`] if `path` cannot be opened as a directory.
/// - [`Error::DeadlineExceeded`] if `timeout` elapses before the scan finishes.
///
/// # Example
///
/// ```no_run
/// use proc_inventory::inventory::scan_directory;
///
/// let snapshot = scan_directory("/run/markers", None).unwrap();
/// for record in &snapshot {
///     println!("{} {}", record.name(), record.pid());
/// }
/// ```
pub fn scan_directory(
    path: impl AsRef<Path>,
    timeout: Option<Duration>,
) -> Result<InventorySnapshot> {
    let path = path.as_ref();
    let started = Instant::now();
    let entries = fs::read_dir(path).map_err(|source| Error::DirectoryUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for entry in entries {
        if let Some(timeout) = timeout.filter(|t| started.elapsed() >= *t) {
            return Err(Error::DeadlineExceeded {
                path: path.to_path_buf(),
                timeout,
            });
        }

        let Some(entry) = entry
            .map_err(|source| EntryError::Listing {
                path: path.to_path_buf(),
                source,
            })
            .ok_log(log::Level::Warn)
        else {
            continue;
        };

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name == "." || name == ".." {
            continue;
        }

        let entry_path = entry.path();
        log::trace!("Considering marker file {}", entry_path.display());
        if let Some(record) = read_marker_file(entry_path, &name).ok_log(log::Level::Warn) {
            log::debug!("Found process {}={}", record.name(), record.pid());
            records.push(record);
        }
    }

    log::debug!(
        "Scanned {} in {} microseconds, found {} processes",
        path.display(),
        started.elapsed().as_micros(),
        records.len()
    );
    Ok(InventorySnapshot::new(records))
}

/// Opens, reads and parses one candidate marker file.
///
/// The file handle is dropped on every return path.
fn read_marker_file(path: PathBuf, name: &str) -> std::result::Result<ProcessRecord, EntryError> {
    // Checked before opening so FIFOs and devices are never opened.
    let metadata = fs::metadata(&path).map_err(|source| EntryError::Metadata {
        path: path.clone(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(EntryError::NotARegularFile { path });
    }

    let file = fsutil::open_file(&path)?;
    let metadata = file.metadata().map_err(|source| EntryError::Metadata {
        path: path.clone(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(EntryError::NotARegularFile { path });
    }

    let raw = fsutil::read_bounded(&file, MARKER_READ_LIMIT).map_err(|source| {
        EntryError::Read {
            path: path.clone(),
            source,
        }
    })?;

    marker::parse_marker(&raw, name).map_err(|source| EntryError::Malformed { path, source })
}
