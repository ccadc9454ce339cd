// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! Helpers for id-addressed sequences.
//!
//! Every list in a template is optional, so these work on
//! `Option<Vec<T>>`: pushing onto an absent list creates it, removing the
//! last entry leaves a present-but-empty list.

use crate::id::{Id, Identified};

pub fn find<'a, T: Identified>(items: &'a Option<Vec<T>>, id: &Id) -> Option<&'a T> {
    items.as_deref()?.iter().find(|item| item.has_id(id))
}

pub fn find_mut<'a, T: Identified>(items: &'a mut Option<Vec<T>>, id: &Id) -> Option<&'a mut T> {
    items.as_mut()?.iter_mut().find(|item| item.has_id(id))
}

pub fn push<T>(items: &mut Option<Vec<T>>, item: T) {
    items.get_or_insert_with(Vec::new).push(item);
}

/// Replaces the entry addressed by `id` with `item`, keeping its position.
/// Returns false when no entry carries that id.
pub fn replace<T: Identified>(items: &mut Option<Vec<T>>, id: &Id, item: T) -> bool {
    match find_mut(items, id) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

/// Removes and returns the entry addressed by `id`.
pub fn remove<T: Identified>(items: &mut Option<Vec<T>>, id: &Id) -> Option<T> {
    let list = items.as_mut()?;
    let index = list.iter().position(|item| item.has_id(id))?;
    Some(list.remove(index))
}
