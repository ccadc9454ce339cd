// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::id::{Id, Identified};
use serde::{Deserialize, Deserializer, Serialize};

/// An identity-tagged string, used for every freeform ordered list of
/// strings in a template (comments, use-statements, implements, trait uses,
/// method body lines).
///
/// In export JSON each entry is written as its bare `value`. Parsing accepts
/// both forms, so previously exported templates can be loaded again.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndexedString {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IndexedRepr {
    Bare(String),
    Wrapped {
        #[serde(default)]
        id: Option<Id>,
        #[serde(default)]
        value: String,
    },
}

impl<'de> Deserialize<'de> for IndexedString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match IndexedRepr::deserialize(deserializer)? {
            IndexedRepr::Bare(value) => IndexedString { id: None, value },
            IndexedRepr::Wrapped { id, value } => IndexedString { id, value },
        })
    }
}

impl IndexedString {
    /// An entry without an identity, as produced by importing export JSON.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: None,
            value: value.into(),
        }
    }

    pub fn with_id(id: impl Into<Id>, value: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Identified for IndexedString {
    fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Id) {
        self.id = Some(id);
    }
}

/// Builds an id-less list from plain strings.
pub fn strings<I, S>(values: I) -> Vec<IndexedString>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(IndexedString::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_wrapped_and_bare_forms() {
        let entries: Vec<IndexedString> =
            serde_json::from_str(r#"[{"id": "a", "value": "one"}, "two", {"value": "three"}]"#)
                .unwrap();
        assert_eq!(
            entries,
            vec![
                IndexedString::with_id("a", "one"),
                IndexedString::new("two"),
                IndexedString::new("three"),
            ]
        );
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(serde_json::from_str::<IndexedString>("42").is_err());
    }

    #[test]
    fn test_strings_helper() {
        let list = strings(["a", "b"]);
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|entry| entry.id.is_none()));
    }
}
