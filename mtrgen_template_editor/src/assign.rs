// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! Identity assignment for freshly loaded templates.
//!
//! Export JSON carries no ids, and hand-written editing JSON may repeat
//! them. Before a tree can be edited every addressable entry needs an id
//! that is unique across the whole template.

use crate::ids::IdGenerator;
use mtrgen_template_schema::{Id, Identified, Template, visit};
use std::collections::HashSet;
use tracing::debug;

/// Gives every identity-keyed entry (indexed strings, constants, methods,
/// params, props) that lacks an id, or repeats one seen earlier in document
/// order, a fresh id. Returns how many ids were assigned.
pub fn assign_ids(template: &mut Template, ids: &mut dyn IdGenerator) -> usize {
    let taken = collect_ids(template);
    let mut seen: HashSet<Id> = HashSet::new();
    let mut assigned = 0;

    visit::template(template, &mut |entry| {
        if let Some(id) = entry.id() {
            if seen.insert(id.clone()) {
                return;
            }
        }
        let id = loop {
            let candidate = ids.next_id();
            if !taken.contains(&candidate) && seen.insert(candidate.clone()) {
                break candidate;
            }
        };
        entry.set_id(id);
        assigned += 1;
    });

    if assigned > 0 {
        debug!(assigned, template = %template.name, "assigned ids");
    }
    assigned
}

/// Every id currently present in the tree
pub(crate) fn collect_ids(template: &mut Template) -> HashSet<Id> {
    let mut found = HashSet::new();
    visit::template(template, &mut |entry| {
        if let Some(id) = entry.id() {
            found.insert(id.clone());
        }
    });
    found
}
