use std::num::ParseIntError;

/// Errors that may occur while resolving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid value `{value}` for `{var}`: {source}")]
    InvalidTimeout {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("value of `{var}` is not valid unicode")]
    NotUnicode { var: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
