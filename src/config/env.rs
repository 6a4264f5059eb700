use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use super::{Config, Error, Result};

/// Environment variable naming the marker directory.
pub const PID_FILE_PATH_VAR: &str = "PID_FILE_PATH";
/// Environment variable holding the per-item timeout in whole seconds.
pub const ITEM_TIMEOUT_VAR: &str = "ITEM_TIMEOUT";

impl Config {
    /// Resolves the configuration from the process environment.
    ///
    /// - `PID_FILE_PATH`: marker directory. Optional; discovery reports
    ///   [`Unconfigured`](crate::inventory::Error::Unconfigured) without it.
    /// - `ITEM_TIMEOUT`: timeout in seconds. `0` or unset means no timeout.
    ///
    /// # Errors
    ///
    /// - [`Error::NotUnicode`] if `ITEM_TIMEOUT` is not valid unicode.
    /// - [`Error::InvalidTimeout`] if `ITEM_TIMEOUT` is not a whole number.
    ///
    /// # Example
    ///
    /// ```bash
    /// PID_FILE_PATH=/run/markers ITEM_TIMEOUT=3 proc-inventory
    /// ```
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var_os(var))
    }

    /// Resolves the configuration using `lookup` to read variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self> {
        let pid_file_path = lookup(PID_FILE_PATH_VAR)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let item_timeout = match lookup(ITEM_TIMEOUT_VAR) {
            Some(raw) => {
                let raw = raw.into_string().map_err(|_| Error::NotUnicode {
                    var: ITEM_TIMEOUT_VAR,
                })?;
                let raw = raw.trim();
                let secs = raw.parse::<u64>().map_err(|source| Error::InvalidTimeout {
                    var: ITEM_TIMEOUT_VAR,
                    value: raw.to_owned(),
                    source,
                })?;
                Some(Duration::from_secs(secs)).filter(|t| !t.is_zero())
            }
            None => None,
        };

        match &pid_file_path {
            Some(path) => log::debug!("Using marker directory {}", path.display()),
            None => log::warn!("`{PID_FILE_PATH_VAR}` is not set, discovery will fail"),
        }

        Ok(Self {
            pid_file_path,
            item_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_from_lookup_all_set() {
        let config = Config::from_lookup(lookup_from(&[
            (PID_FILE_PATH_VAR, "/run/markers"),
            (ITEM_TIMEOUT_VAR, "3"),
        ]))
        .unwrap();
        assert_eq!(config.pid_file_path(), Some(Path::new("/run/markers")));
        assert_eq!(config.item_timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_from_lookup_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_lookup_empty_path_is_unset() {
        let config = Config::from_lookup(lookup_from(&[(PID_FILE_PATH_VAR, "")])).unwrap();
        assert_eq!(config.pid_file_path(), None);
    }

    #[test]
    fn test_from_lookup_zero_timeout_disables_deadline() {
        let config = Config::from_lookup(lookup_from(&[(ITEM_TIMEOUT_VAR, "0")])).unwrap();
        assert_eq!(config.item_timeout(), None);
    }

    #[test]
    fn test_from_lookup_invalid_timeout() {
        let err = Config::from_lookup(lookup_from(&[(ITEM_TIMEOUT_VAR, "soon")])).unwrap_err();
        match err {
            Error::InvalidTimeout { var, value, .. } => {
                assert_eq!(var, ITEM_TIMEOUT_VAR);
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_with_item_timeout() {
        let config = Config::new("/tmp").with_item_timeout(Duration::from_secs(5));
        assert_eq!(config.item_timeout(), Some(Duration::from_secs(5)));
        let config = config.with_item_timeout(Duration::ZERO);
        assert_eq!(config.item_timeout(), None);
    }
}
