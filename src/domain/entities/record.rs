//! Stored record entity.

use serde::{Deserialize, Serialize};

/// Opaque server-assigned record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A stored name/age record.
///
/// Created server-side on submission; immutable once fetched. The client only
/// replaces its in-memory list of records wholesale, never mutates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Stored name.
    pub name: String,
    /// Stored age.
    pub age: i64,
}

impl Record {
    /// Creates a new record.
    #[must_use]
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_construction() {
        let record = Record::new("abc123", "Ada", 30);
        assert_eq!(record.id.as_str(), "abc123");
        assert_eq!(record.name, "Ada");
        assert_eq!(record.age, 30);
    }

    #[test]
    fn test_record_id_display() {
        let id = RecordId::from("65f0");
        assert_eq!(id.to_string(), "65f0");
    }
}
