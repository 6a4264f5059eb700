use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Error that occurs when opening a file fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to open file `{path}`: {source}")]
pub struct FileOpenError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Opens a file at the given path for reading.
///
/// # Errors
///
/// Returns a [`FileOpenError`] if the file cannot be opened.
///
/// # Example
/// ```no_run
/// # use proc_inventory::fsutil;
/// let file = fsutil::open_file("/run/markers/nginx")?;
/// # Ok::<(), fsutil::FileOpenError>(())
/// ```
pub fn open_file(path: impl AsRef<Path>) -> Result<File, FileOpenError> {
    let path = path.as_ref();
    File::open(path).map_err(|source| FileOpenError {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads at most `limit` bytes from `reader`.
///
/// Reading stops at end of input or once `limit` bytes have been read,
/// whichever comes first, so the returned buffer never exceeds `limit`.
pub fn read_bounded<R: Read>(reader: R, limit: usize) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(limit.min(512));
    reader.take(limit as u64).read_to_end(&mut buf)?;
    Ok(buf)
}
