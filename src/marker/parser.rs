//! Parser for the content of a single marker file.
//!
//! The expected layout is a base-10 pid followed by a newline. Anything after
//! the first newline is ignored:
//!
//! ```text
//! 4242\n
//! optional trailing content
//! ```

use std::num::ParseIntError;

use crate::process::{ProcessName, ProcessRecord};

/// Maximum number of bytes read from a marker file.
///
/// A file whose first newline lies beyond this limit is rejected.
pub const MARKER_READ_LIMIT: usize = 8 * 1024;

/// Errors that may occur when parsing the content of a marker file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no newline within the first {len} bytes")]
    MissingNewline { len: usize },

    #[error("pid `{value}` contains non-digit characters")]
    NonDigit { value: String },

    #[error("invalid pid `{value}`: {source}")]
    InvalidPid {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses the raw content of a marker file into a [`ProcessRecord`].
///
/// Only the bytes up to the first `\n` in `raw` are considered, and the search
/// never looks past `raw.len()`. That segment must be a non-empty run of ASCII
/// digits whose value fits in a `u32`.
///
/// # Arguments
///
/// * `raw` - The bytes read from the marker file, at most [`MARKER_READ_LIMIT`] long.
/// * `entry_name` - The marker file's directory entry name, used as the process name.
///
/// # Errors
///
/// - [`ParseError::MissingNewline`] if `raw` has no newline.
/// - [`ParseError::NonDigit`] if the first line contains anything but ASCII digits.
/// - [`ParseError::InvalidPid`] if the first line is empty or overflows a `u32`.
///
/// # Example
///
/// ```
/// use proc_inventory::marker::parse_marker;
///
/// let record = parse_marker(b"101\n", "svcA").unwrap();
/// assert_eq!(record.pid(), 101);
/// assert_eq!(record.name().as_ref(), "svcA");
/// ```
pub fn parse_marker(raw: &[u8], entry_name: &str) -> Result<ProcessRecord, ParseError> {
    let newline = raw
        .iter()
        .position(|&b| b == b'\n')
        .ok_or(ParseError::MissingNewline { len: raw.len() })?;
    let pid = &raw[..newline];

    if !pid.iter().all(u8::is_ascii_digit) {
        return Err(ParseError::NonDigit {
            value: String::from_utf8_lossy(pid).into_owned(),
        });
    }

    // All ASCII at this point, so this borrows without copying.
    let value = String::from_utf8_lossy(pid);
    let pid = value.parse::<u32>().map_err(|source| ParseError::InvalidPid {
        value: value.to_string(),
        source,
    })?;

    Ok(ProcessRecord::new(ProcessName::new(entry_name), pid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pid_terminated_by_newline() {
        let record = parse_marker(b"101\n", "svcA").unwrap();
        assert_eq!(record.pid(), 101);
        assert_eq!(record.name().as_ref(), "svcA");
    }

    #[test]
    fn ignores_content_after_first_newline() {
        let record = parse_marker(b"202\nextra\n303\n", "svcB").unwrap();
        assert_eq!(record.pid(), 202);
    }

    #[test]
    fn parses_max_u32() {
        let record = parse_marker(b"4294967295\n", "max").unwrap();
        assert_eq!(record.pid(), u32::MAX);
    }

    #[test]
    fn error_on_missing_newline() {
        let err = parse_marker(b"123", "nolf").unwrap_err();
        match err {
            ParseError::MissingNewline { len } => assert_eq!(len, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_on_empty_content() {
        let err = parse_marker(b"", "empty").unwrap_err();
        assert!(matches!(err, ParseError::MissingNewline { len: 0 }));
    }

    #[test]
    fn error_on_newline_only() {
        let err = parse_marker(b"\n", "blank").unwrap_err();
        assert!(matches!(err, ParseError::InvalidPid { .. }));
    }

    #[test]
    fn error_on_non_numeric_pid() {
        let err = parse_marker(b"notanumber\n", "bad").unwrap_err();
        match err {
            ParseError::NonDigit { value } => assert_eq!(value, "notanumber"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_on_signed_or_padded_pid() {
        for raw in ["+12\n", "-12\n", " 12\n", "12 \n", "12\r\n"] {
            let raw = raw.as_bytes();
            let err = parse_marker(raw, "x").unwrap_err();
            assert!(matches!(err, ParseError::NonDigit { .. }), "{raw:?}");
        }
    }

    #[test]
    fn error_on_pid_overflow() {
        let err = parse_marker(b"4294967296\n", "big").unwrap_err();
        match err {
            ParseError::InvalidPid { value, .. } => assert_eq!(value, "4294967296"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_on_non_utf8_pid() {
        let err = parse_marker(b"\xff\xfe\n", "binary").unwrap_err();
        assert!(matches!(err, ParseError::NonDigit { .. }));
    }
}
