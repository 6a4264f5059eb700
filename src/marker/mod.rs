//! Marker file parsing.
//!
//! A marker file announces one tracked process: its file name is the process
//! name and its first line holds the pid in decimal.
mod parser;

pub use parser::{MARKER_READ_LIMIT, ParseError, parse_marker};
