//! In-progress form input and the payload built from it.

use serde::Serialize;

/// The user's in-progress, unsubmitted form input.
///
/// The age is kept string-encoded until submission. The draft is reset to
/// empty after a successful submission and retained verbatim after a failed
/// one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    /// Entered name.
    pub name: String,
    /// Entered age, string-encoded.
    pub age: String,
}

impl RecordDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether either field is still empty.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.name.is_empty() || self.age.is_empty()
    }

    /// Clears both fields.
    pub fn clear(&mut self) {
        self.name.clear();
        self.age.clear();
    }

    /// Builds the submission payload from the current field values.
    #[must_use]
    pub fn to_new_record(&self) -> NewRecord {
        NewRecord {
            name: self.name.clone(),
            age: AgeInput::parse(&self.age),
        }
    }
}

/// Age value as it will be sent to the server.
///
/// The client performs no guard beyond the widget's digit filter: a draft age
/// that does not parse is passed through as the raw string so the server's
/// rejection path stays reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AgeInput {
    /// Parsed integer age.
    Number(i64),
    /// Unparseable input, forwarded unchanged.
    Raw(String),
}

impl AgeInput {
    /// Parses a string-encoded age, falling back to the raw string.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        value
            .parse::<i64>()
            .map_or_else(|_| Self::Raw(value.to_string()), Self::Number)
    }
}

/// Payload for a create-record request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecord {
    /// Name to store.
    pub name: String,
    /// Age to store.
    pub age: AgeInput,
}
