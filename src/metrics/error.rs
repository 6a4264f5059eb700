use crate::inventory;

/// Errors returned when invoking an item key.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported item key `{0}`")]
    UnknownKey(String),
    #[error("item key `{key}` does not accept parameters (got {count})")]
    UnexpectedParameters { key: &'static str, count: usize },
    #[error("item key `{0}` is not implemented")]
    NotImplemented(&'static str),
    #[error(transparent)]
    Discovery(#[from] inventory::Error),
    #[error("failed to encode discovery document: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
