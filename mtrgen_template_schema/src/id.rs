// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of an addressable list entry.
///
/// Ids only exist so an editing session can find "this method" or "that
/// comment line" without relying on array positions. They never appear in
/// export JSON. Both numbers and strings are accepted on input, since
/// earlier editors emitted either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Text(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id::Text(value)
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Id::Number(value.into())
    }
}

/// Entities that carry an editing identity.
pub trait Identified {
    fn id(&self) -> Option<&Id>;
    fn set_id(&mut self, id: Id);

    /// True if this entity is addressed by `id`.
    fn has_id(&self, id: &Id) -> bool {
        self.id() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids_parse() {
        let ids: Vec<Id> = serde_json::from_str(r#"[7, "0b9a", 12]"#).unwrap();
        assert_eq!(ids, vec![Id::from(7u64), Id::from("0b9a"), Id::from(12u64)]);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(Id::from(42u64).to_string(), "42");
        assert_eq!(Id::from("a-b").to_string(), "a-b");
    }

    #[test]
    fn test_number_and_text_are_distinct() {
        assert_ne!(Id::from(1u64), Id::from("1"));
    }
}
