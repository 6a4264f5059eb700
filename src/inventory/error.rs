use std::path::PathBuf;
use std::time::Duration;

use crate::fsutil;
use crate::marker;

/// Errors that fail a whole discovery call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no marker directory configured")]
    Unconfigured,
    #[error("failed to read marker directory `{path}`: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("scan of marker directory `{path}` exceeded timeout of {timeout:?}")]
    DeadlineExceeded { path: PathBuf, timeout: Duration },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Errors for a single directory entry. These only cause the entry to be skipped.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("failed to list entry in `{path}`: {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Open(#[from] fsutil::FileOpenError),
    #[error("failed to read metadata of `{path}`: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{path}` is not a regular file")]
    NotARegularFile { path: PathBuf },
    #[error("failed to read marker file `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed marker file `{path}`: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: marker::ParseError,
    },
}
