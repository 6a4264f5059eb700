//! Process records produced by a marker-directory scan.
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// The maximum length, in bytes, of a [`ProcessName`].
pub const PROCESS_NAME_MAX_LEN: usize = 255;

/// Display name of a tracked process, taken from its marker file's name.
///
/// Names longer than [`PROCESS_NAME_MAX_LEN`] bytes are cut down to the longest
/// prefix that fits and still ends on a UTF-8 character boundary.
///
/// # Examples
///
/// ```
/// # use proc_inventory::process::ProcessName;
/// let name = ProcessName::new("nginx");
/// assert_eq!(name.as_ref(), "nginx");
///
/// let long = "x".repeat(300);
/// assert_eq!(ProcessName::new(&long).as_ref().len(), 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessName(Arc<str>);

impl ProcessName {
    pub fn new(src: impl AsRef<str>) -> Self {
        Self(truncate_at_char_boundary(src.as_ref(), PROCESS_NAME_MAX_LEN).into())
    }
}

impl AsRef<str> for ProcessName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProcessName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One discovered process: a name and the pid recorded in its marker file.
///
/// No check is made that a process with this pid is actually running.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessRecord {
    name: ProcessName,
    pid: u32,
}

impl ProcessRecord {
    pub fn new(name: ProcessName, pid: u32) -> Self {
        Self { name, pid }
    }

    pub fn name(&self) -> &ProcessName {
        &self.name
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }
}

fn truncate_at_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_kept_verbatim() {
        let name = ProcessName::new("svc-A.pid");
        assert_eq!(name.as_ref(), "svc-A.pid");
        assert_eq!(name.to_string(), "svc-A.pid");
    }

    #[test]
    fn test_name_at_limit_is_untouched() {
        let raw = "a".repeat(PROCESS_NAME_MAX_LEN);
        assert_eq!(ProcessName::new(&raw).as_ref(), raw);
    }

    #[test]
    fn test_long_name_truncated_to_limit() {
        let raw = "b".repeat(PROCESS_NAME_MAX_LEN + 40);
        let name = ProcessName::new(&raw);
        assert_eq!(name.as_ref().len(), PROCESS_NAME_MAX_LEN);
        assert!(raw.starts_with(name.as_ref()));
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // 254 ASCII bytes followed by a 3-byte character straddling the limit.
        let raw = format!("{}€tail", "c".repeat(254));
        let name = ProcessName::new(&raw);
        assert_eq!(name.as_ref(), "c".repeat(254));
    }

    #[test]
    fn test_record_accessors() {
        let record = ProcessRecord::new(ProcessName::new("svcA"), 101);
        assert_eq!(record.name().as_ref(), "svcA");
        assert_eq!(record.pid(), 101);
    }
}
