//! Encoder for the discovery document consumed by the monitoring agent.
//!
//! The document has a fixed shape, with every value encoded as a string:
//!
//! ```json
//! { "data": [ { "{#PNAME}": "nginx", "{#PID}": "4242" } ] }
//! ```

use serde::Serialize;

use crate::inventory::InventorySnapshot;
use crate::process::ProcessRecord;

/// Macro name carrying the process name.
pub const PNAME_MACRO: &str = "{#PNAME}";
/// Macro name carrying the decimal pid.
pub const PID_MACRO: &str = "{#PID}";

/// One discovered entity in a [`DiscoveryDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryEntry {
    #[serde(rename = "{#PNAME}")]
    name: String,
    #[serde(rename = "{#PID}")]
    pid: String,
}

impl DiscoveryEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pid as its base-10 string.
    pub fn pid(&self) -> &str {
        &self.pid
    }
}

impl From<&ProcessRecord> for DiscoveryEntry {
    fn from(record: &ProcessRecord) -> Self {
        Self {
            name: record.name().to_string(),
            pid: record.pid().to_string(),
        }
    }
}

/// Serializable form of an [`InventorySnapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscoveryDocument {
    data: Vec<DiscoveryEntry>,
}

impl DiscoveryDocument {
    /// Encodes a snapshot, keeping its order.
    ///
    /// # Example
    ///
    /// ```
    /// use proc_inventory::discovery::DiscoveryDocument;
    /// use proc_inventory::inventory::InventorySnapshot;
    ///
    /// let document = DiscoveryDocument::from_snapshot(&InventorySnapshot::default());
    /// assert_eq!(document.to_json().unwrap(), r#"{"data":[]}"#);
    /// ```
    pub fn from_snapshot(snapshot: &InventorySnapshot) -> Self {
        Self {
            data: snapshot.iter().map(DiscoveryEntry::from).collect(),
        }
    }

    pub fn entries(&self) -> &[DiscoveryEntry] {
        self.data.as_slice()
    }

    /// Renders the document as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessName;

    fn snapshot(records: &[(&str, u32)]) -> InventorySnapshot {
        InventorySnapshot::new(
            records
                .iter()
                .map(|(name, pid)| ProcessRecord::new(ProcessName::new(name), *pid))
                .collect(),
        )
    }

    #[test]
    fn test_encode_empty_snapshot() {
        let document = DiscoveryDocument::from_snapshot(&InventorySnapshot::default());
        assert_eq!(document.to_json().unwrap(), r#"{"data":[]}"#);
    }

    #[test]
    fn test_encode_records_in_order() {
        let document = DiscoveryDocument::from_snapshot(&snapshot(&[("svcB", 202), ("svcA", 101)]));
        assert_eq!(
            document.to_json().unwrap(),
            r#"{"data":[{"{#PNAME}":"svcB","{#PID}":"202"},{"{#PNAME}":"svcA","{#PID}":"101"}]}"#
        );
    }

    #[test]
    fn test_pid_encoded_as_string() {
        let document = DiscoveryDocument::from_snapshot(&snapshot(&[("init", 1)]));
        let value: serde_json::Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();
        let entry = &value["data"][0];
        assert_eq!(entry[PID_MACRO], serde_json::Value::String("1".to_owned()));
        assert_eq!(entry[PNAME_MACRO], serde_json::Value::String("init".to_owned()));
        assert_eq!(entry.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_name_is_json_escaped() {
        let document = DiscoveryDocument::from_snapshot(&snapshot(&[("we\"ird\\name", 5)]));
        let value: serde_json::Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();
        assert_eq!(value["data"][0][PNAME_MACRO], "we\"ird\\name");
    }
}
