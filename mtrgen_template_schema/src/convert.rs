// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! JSON text <-> model conversions.
//!
//! Exports go through [`Export`](crate::Export) and are pretty-printed with
//! two-space indentation and keys in alphabetical order. Parsers are purely
//! structural: ids are neither checked nor invented, and missing required
//! fields fall back to empty values instead of failing.

use crate::declaration::{Class, Interface, Trait};
use crate::error::SchemaError;
use crate::export::{Export, ExportMode, collapse_shapes};
use crate::id::{Id, Identified};
use crate::indexed::IndexedString;
use crate::member::{Constant, Method, Param, Prop};
use crate::template::{File, Namespace, Template};
use crate::visit;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;

/// Export JSON for the generator, using the typed traversal.
pub fn serialize(template: &Template) -> Result<String, SchemaError> {
    serialize_with(template, ExportMode::Typed)
}

/// Export JSON using the legacy shape-based rewrite.
pub fn serialize_shape_based(template: &Template) -> Result<String, SchemaError> {
    serialize_with(template, ExportMode::ShapeBased)
}

pub fn serialize_with(template: &Template, mode: ExportMode) -> Result<String, SchemaError> {
    let tree = match mode {
        ExportMode::Typed => template.export(),
        ExportMode::ShapeBased => {
            // The rewrite only recognises indexed strings that carry an id
            let mut with_ids = template.clone();
            visit::template(&mut with_ids, &mut |entry| {
                if entry.id().is_none() {
                    entry.set_id(Id::from(0u64));
                }
            });
            collapse_shapes(serde_json::to_value(&with_ids).map_err(SchemaError::Encode)?)
        }
    };
    trace!(?mode, name = %template.name, "exporting template");
    serde_json::to_string_pretty(&tree).map_err(SchemaError::Encode)
}

/// Pretty JSON that keeps every id and every `IndexedString` object, so
/// that [`deserialize`] reproduces the tree exactly.
pub fn to_editing_json(template: &Template) -> Result<String, SchemaError> {
    serde_json::to_string_pretty(template).map_err(SchemaError::Encode)
}

pub fn deserialize(json: &str) -> Result<Template, SchemaError> {
    parse(json)
}

pub fn to_file(json: &str) -> Result<File, SchemaError> {
    parse(json)
}

pub fn to_class(json: &str) -> Result<Class, SchemaError> {
    parse(json)
}

pub fn to_constant(json: &str) -> Result<Constant, SchemaError> {
    parse(json)
}

pub fn to_method(json: &str) -> Result<Method, SchemaError> {
    parse(json)
}

pub fn to_param(json: &str) -> Result<Param, SchemaError> {
    parse(json)
}

pub fn to_prop(json: &str) -> Result<Prop, SchemaError> {
    parse(json)
}

pub fn to_interface(json: &str) -> Result<Interface, SchemaError> {
    parse(json)
}

pub fn to_namespace(json: &str) -> Result<Namespace, SchemaError> {
    parse(json)
}

pub fn to_trait(json: &str) -> Result<Trait, SchemaError> {
    parse(json)
}

// Compact, id-preserving encoders for single entities.

pub fn file_to_json(value: &File) -> Result<String, SchemaError> {
    compact(value)
}

pub fn class_to_json(value: &Class) -> Result<String, SchemaError> {
    compact(value)
}

pub fn constant_to_json(value: &Constant) -> Result<String, SchemaError> {
    compact(value)
}

pub fn method_to_json(value: &Method) -> Result<String, SchemaError> {
    compact(value)
}

pub fn param_to_json(value: &Param) -> Result<String, SchemaError> {
    compact(value)
}

pub fn prop_to_json(value: &Prop) -> Result<String, SchemaError> {
    compact(value)
}

pub fn interface_to_json(value: &Interface) -> Result<String, SchemaError> {
    compact(value)
}

pub fn namespace_to_json(value: &Namespace) -> Result<String, SchemaError> {
    compact(value)
}

pub fn trait_to_json(value: &Trait) -> Result<String, SchemaError> {
    compact(value)
}

pub fn indexed_to_string(indexed: &IndexedString) -> &str {
    &indexed.value
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<T, SchemaError> {
    serde_json::from_str(json).map_err(SchemaError::Parse)
}

fn compact<T: Serialize>(value: &T) -> Result<String, SchemaError> {
    serde_json::to_string(value).map_err(SchemaError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Declaration, DeclarationKind, Modifier, Visibility};

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = deserialize("{\"name\": ").unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }

    #[test]
    fn test_wrong_structure_is_parse_error() {
        assert!(matches!(deserialize("[1, 2]"), Err(SchemaError::Parse(_))));
        assert!(matches!(
            to_method(r#"{"name": "x", "visibility": "internal"}"#),
            Err(SchemaError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_required_fields_default() {
        let template = deserialize("{}").unwrap();
        assert_eq!(template.name, "");
        assert_eq!(template.file, File::default());
    }

    #[test]
    fn test_sibling_parsers() {
        let class = to_class(r#"{"name": "A", "modifier": "abstract", "implements": ["X"]}"#).unwrap();
        assert_eq!(class.modifier, Some(Modifier::Abstract));
        assert_eq!(class.implements, Some(vec![IndexedString::new("X")]));

        let constant = to_constant(r#"{"id": 4, "name": "B", "value": [1, 2]}"#).unwrap();
        assert_eq!(constant.value, serde_json::json!([1, 2]));

        let param = to_param(r#"{"name": "p", "type": "int", "promoted": true}"#).unwrap();
        assert_eq!(param.type_name.as_deref(), Some("int"));
        assert_eq!(param.promoted, Some(true));

        let prop = to_prop(r#"{"name": "q", "visibility": "protected", "static": true}"#).unwrap();
        assert_eq!(prop.visibility, Some(Visibility::Protected));
        assert_eq!(prop.is_static, Some(true));

        let interface = to_interface(r#"{"name": "I", "extends": "J"}"#).unwrap();
        assert_eq!(interface.extends.as_deref(), Some("J"));

        let namespace = to_namespace(r#"{"name": "App", "trait": {"name": "T"}}"#).unwrap();
        assert_eq!(namespace.trait_def.unwrap().name, "T");

        let trait_def = to_trait(r#"{"name": "T", "props": []}"#).unwrap();
        assert_eq!(trait_def.props, Some(vec![]));

        let file = to_file(r#"{"strict": true}"#).unwrap();
        assert_eq!(file.strict, Some(true));
    }

    #[test]
    fn test_compact_encoders_keep_ids() {
        let method = Method::new("run").with_id("m-1");
        assert_eq!(method_to_json(&method).unwrap(), r#"{"id":"m-1","name":"run"}"#);

        let file = File::default().with_declaration(Declaration::empty(DeclarationKind::Trait, "T"));
        assert_eq!(file_to_json(&file).unwrap(), r#"{"trait":{"name":"T"}}"#);
    }

    #[test]
    fn test_indexed_to_string() {
        let entry = IndexedString::with_id(9u64, "use Foo;");
        assert_eq!(indexed_to_string(&entry), "use Foo;");
    }

    #[test]
    fn test_export_is_two_space_indented() {
        let template = Template::new("T", "f", "p");
        let json = serialize(&template).unwrap();
        assert_eq!(
            json,
            "{\n  \"file\": {},\n  \"filename\": \"f\",\n  \"name\": \"T\",\n  \"path\": \"p\"\n}"
        );
    }
}
