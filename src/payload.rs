//! Payload value types
//!
//! The two payloads the facade transmits. Each is a single named field,
//! JSON-encoded to bytes immediately before the call that carries it; there
//! is no identity or lifecycle beyond that call.

use serde::{Deserialize, Serialize};

/// Record appended to the stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamRecord {
    /// Display name carried by the record; omitted from the encoding when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl StreamRecord {
    /// Creates a record with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Object uploaded to the bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageObject {
    /// Display name carried by the object
    pub name: String,
}

impl StorageObject {
    /// Creates an object with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_record_encodes_single_name_field() {
        let record = StreamRecord::new("Record Name");
        let encoded = serde_json::to_string(&record).unwrap();

        assert_eq!(encoded, r#"{"name":"Record Name"}"#);
    }

    #[test]
    fn stream_record_omits_empty_name() {
        let record = StreamRecord::new("");
        let encoded = serde_json::to_string(&record).unwrap();

        assert_eq!(encoded, "{}");

        let decoded: StreamRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.name, "");
    }

    #[test]
    fn storage_object_round_trips_name() {
        let object = StorageObject::new("Object Name");
        let encoded = serde_json::to_vec(&object).unwrap();

        assert_eq!(encoded, br#"{"name":"Object Name"}"#);

        let decoded: StorageObject = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded.name, "Object Name");
    }
}
