// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! Projection of a template tree onto the generator-facing JSON.
//!
//! [`Export`] is implemented for every entity and decides field by field
//! what the generator sees: identity fields are dropped and every
//! [`IndexedString`] becomes its bare string. `Value` payloads supplied by
//! the user keep their shape but lose every `id` key, at any depth.
//!
//! [`collapse_shapes`] reproduces the older shape-based rewrite, which
//! collapses *any* object shaped `{id, value}` and drops *any* `id` key,
//! including inside user payloads.

use crate::declaration::{Class, Interface, Trait};
use crate::indexed::IndexedString;
use crate::member::{Constant, Method, Param, Prop};
use crate::modifiers::{Modifier, Visibility};
use crate::template::{File, Namespace, Template};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How identity wrappers are recognised on export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    /// Typed traversal: only real `IndexedString`s collapse. `id` keys are
    /// dropped everywhere.
    #[default]
    Typed,
    /// Legacy rewrite by JSON shape. A payload that happens to look like
    /// `{"id": .., "value": ..}` is collapsed as well.
    ShapeBased,
}

/// Conversion of a model entity to its export JSON.
pub trait Export {
    fn export(&self) -> Value;
}

impl Export for IndexedString {
    fn export(&self) -> Value {
        Value::String(self.value.clone())
    }
}

impl Export for String {
    fn export(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Export for bool {
    fn export(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Export for Value {
    fn export(&self) -> Value {
        match self {
            Value::Object(map) => Value::Object(
                map.iter()
                    .filter(|(key, _)| key.as_str() != "id")
                    .map(|(key, child)| (key.clone(), child.export()))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(items.iter().map(Export::export).collect()),
            other => other.clone(),
        }
    }
}

impl Export for Modifier {
    fn export(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

impl Export for Visibility {
    fn export(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

impl<T: Export> Export for Vec<T> {
    fn export(&self) -> Value {
        Value::Array(self.iter().map(Export::export).collect())
    }
}

/// Accumulates the fields of one exported object, skipping absent ones.
struct ObjectWriter {
    map: Map<String, Value>,
}

impl ObjectWriter {
    fn new() -> Self {
        Self { map: Map::new() }
    }

    fn field<T: Export + ?Sized>(mut self, key: &str, value: &T) -> Self {
        self.map.insert(key.to_string(), value.export());
        self
    }

    fn optional<T: Export>(mut self, key: &str, value: &Option<T>) -> Self {
        if let Some(value) = value {
            self.map.insert(key.to_string(), value.export());
        }
        self
    }

    fn finish(self) -> Value {
        Value::Object(self.map)
    }
}

impl Export for Template {
    fn export(&self) -> Value {
        ObjectWriter::new()
            .optional("autoImport", &self.auto_import)
            .field("file", &self.file)
            .field("filename", &self.filename)
            .field("name", &self.name)
            .field("path", &self.path)
            .finish()
    }
}

impl Export for File {
    fn export(&self) -> Value {
        ObjectWriter::new()
            .optional("class", &self.class)
            .optional("interface", &self.interface)
            .optional("namespace", &self.namespace)
            .optional("strict", &self.strict)
            .optional("trait", &self.trait_def)
            .optional("use", &self.uses)
            .finish()
    }
}

impl Export for Namespace {
    fn export(&self) -> Value {
        ObjectWriter::new()
            .optional("class", &self.class)
            .optional("interface", &self.interface)
            .field("name", &self.name)
            .optional("trait", &self.trait_def)
            .optional("use", &self.uses)
            .finish()
    }
}

impl Export for Class {
    fn export(&self) -> Value {
        ObjectWriter::new()
            .optional("comments", &self.comments)
            .optional("constants", &self.constants)
            .optional("extends", &self.extends)
            .optional("implements", &self.implements)
            .optional("methods", &self.methods)
            .optional("modifier", &self.modifier)
            .field("name", &self.name)
            .optional("props", &self.props)
            .optional("traits", &self.traits)
            .finish()
    }
}

impl Export for Interface {
    fn export(&self) -> Value {
        ObjectWriter::new()
            .optional("comments", &self.comments)
            .optional("constants", &self.constants)
            .optional("extends", &self.extends)
            .optional("methods", &self.methods)
            .field("name", &self.name)
            .finish()
    }
}

impl Export for Trait {
    fn export(&self) -> Value {
        ObjectWriter::new()
            .optional("comments", &self.comments)
            .optional("methods", &self.methods)
            .field("name", &self.name)
            .optional("props", &self.props)
            .finish()
    }
}

impl Export for Constant {
    fn export(&self) -> Value {
        ObjectWriter::new()
            .optional("comments", &self.comments)
            .field("name", &self.name)
            .field("value", &self.value)
            .optional("visibility", &self.visibility)
            .finish()
    }
}

impl Export for Method {
    fn export(&self) -> Value {
        ObjectWriter::new()
            .optional("body", &self.body)
            .optional("comments", &self.comments)
            .optional("modifier", &self.modifier)
            .field("name", &self.name)
            .optional("nullable", &self.nullable)
            .optional("params", &self.params)
            .optional("ref", &self.by_ref)
            .optional("return", &self.return_type)
            .optional("static", &self.is_static)
            .optional("visibility", &self.visibility)
            .finish()
    }
}

impl Export for Param {
    fn export(&self) -> Value {
        ObjectWriter::new()
            .field("name", &self.name)
            .optional("nullable", &self.nullable)
            .optional("promoted", &self.promoted)
            .optional("ref", &self.by_ref)
            .optional("type", &self.type_name)
            .optional("value", &self.value)
            .finish()
    }
}

impl Export for Prop {
    fn export(&self) -> Value {
        ObjectWriter::new()
            .optional("comments", &self.comments)
            .optional("getter", &self.getter)
            .optional("init", &self.init)
            .field("name", &self.name)
            .optional("nullable", &self.nullable)
            .optional("setter", &self.setter)
            .optional("static", &self.is_static)
            .optional("type", &self.type_name)
            .optional("value", &self.value)
            .optional("visibility", &self.visibility)
            .finish()
    }
}

/// Shape-based rewrite of an id-carrying JSON tree.
///
/// Depth-first over every object and array:
///  1. an object whose key set is exactly `{id, value}` is replaced by its
///     `value` (the children of that value are still rewritten);
///  2. otherwise every key named `id` is dropped.
///
/// The shape check looks at the object as it was before any `id` removal.
pub fn collapse_shapes(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            if is_wrapper(&map) {
                let inner = map.remove("value").unwrap_or(Value::Null);
                return rewrite_children(inner);
            }
            Value::Object(
                map.into_iter()
                    .filter(|(key, _)| key != "id")
                    .map(|(key, child)| (key, collapse_shapes(child)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(collapse_shapes).collect()),
        other => other,
    }
}

// Applies the rewrite below `value` without re-testing `value` itself.
fn rewrite_children(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| key != "id")
                .map(|(key, child)| (key, collapse_shapes(child)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(collapse_shapes).collect()),
        other => other,
    }
}

fn is_wrapper(map: &Map<String, Value>) -> bool {
    map.len() == 2 && map.contains_key("id") && map.contains_key("value")
}
