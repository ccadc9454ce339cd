// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use mtrgen_template_schema::Id;
use ulid::Ulid;

/// Source of fresh identities for list entries.
///
/// Ids only need to be unique within one editing session; no ordering or
/// format is implied.
pub trait IdGenerator {
    fn next_id(&mut self) -> Id;
}

/// ULID strings. The default generator for interactive sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct UlidIds;

impl IdGenerator for UlidIds {
    fn next_id(&mut self) -> Id {
        Id::Text(Ulid::new().to_string())
    }
}

/// `"{prefix}{n}"` with `n` counting up from 1. Deterministic, so edit
/// scripts and tests can refer to the ids they will produce.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Id {
        let id = Id::Text(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new("m");
        assert_eq!(ids.next_id(), Id::from("m1"));
        assert_eq!(ids.next_id(), Id::from("m2"));
    }

    #[test]
    fn test_ulid_ids_are_unique() {
        let mut ids = UlidIds;
        let generated: HashSet<Id> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 100);
    }
}
