// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::convert;
use crate::declaration::{Class, Declaration, DeclarationBody, DeclarationKind, Interface, Trait};
use crate::error::SchemaError;
use crate::export::ExportMode;
use crate::indexed::IndexedString;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Root of a template: one generatable source file.
///
/// `filename` and `path` may contain generator placeholders such as
/// `<%name%>`; they are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_import: Option<bool>,
    #[serde(default)]
    pub file: File,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
}

/// Root level of the generated file.
///
/// Holds either one declaration directly or a [`Namespace`] wrapping one.
/// The types allow both at once; the editor keeps them exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<Class>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<Interface>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<Namespace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(rename = "trait", default, skip_serializing_if = "Option::is_none")]
    pub trait_def: Option<Trait>,
    /// Import statements
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<Vec<IndexedString>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<Class>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<Interface>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "trait", default, skip_serializing_if = "Option::is_none")]
    pub trait_def: Option<Trait>,
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<Vec<IndexedString>>,
}

/// Anything holding the class / interface / trait slots: a [`File`] or a
/// [`Namespace`].
pub trait DeclarationContainer {
    fn slots(&self) -> (&Option<Class>, &Option<Interface>, &Option<Trait>);
    fn slots_mut(&mut self) -> (&mut Option<Class>, &mut Option<Interface>, &mut Option<Trait>);

    /// Kinds of the declarations currently present, in slot order
    fn declaration_kinds(&self) -> Vec<DeclarationKind> {
        let (class, interface, trait_def) = self.slots();
        let mut kinds = Vec::new();
        if class.is_some() {
            kinds.push(DeclarationKind::Class);
        }
        if interface.is_some() {
            kinds.push(DeclarationKind::Interface);
        }
        if trait_def.is_some() {
            kinds.push(DeclarationKind::Trait);
        }
        kinds
    }

    fn has_declaration(&self) -> bool {
        !self.declaration_kinds().is_empty()
    }

    fn declaration_mut(&mut self, kind: DeclarationKind) -> Option<&mut dyn DeclarationBody> {
        let (class, interface, trait_def) = self.slots_mut();
        match kind {
            DeclarationKind::Class => class.as_mut().map(|c| c as &mut dyn DeclarationBody),
            DeclarationKind::Interface => interface.as_mut().map(|i| i as &mut dyn DeclarationBody),
            DeclarationKind::Trait => trait_def.as_mut().map(|t| t as &mut dyn DeclarationBody),
        }
    }

    /// Stores `declaration` in its slot, replacing whatever was there.
    fn set_declaration(&mut self, declaration: Declaration) {
        let (class, interface, trait_def) = self.slots_mut();
        match declaration {
            Declaration::Class(c) => *class = Some(c),
            Declaration::Interface(i) => *interface = Some(i),
            Declaration::Trait(t) => *trait_def = Some(t),
        }
    }

    fn take_declaration(&mut self, kind: DeclarationKind) -> Option<Declaration> {
        let (class, interface, trait_def) = self.slots_mut();
        match kind {
            DeclarationKind::Class => class.take().map(Declaration::Class),
            DeclarationKind::Interface => interface.take().map(Declaration::Interface),
            DeclarationKind::Trait => trait_def.take().map(Declaration::Trait),
        }
    }
}

impl DeclarationContainer for File {
    fn slots(&self) -> (&Option<Class>, &Option<Interface>, &Option<Trait>) {
        (&self.class, &self.interface, &self.trait_def)
    }

    fn slots_mut(&mut self) -> (&mut Option<Class>, &mut Option<Interface>, &mut Option<Trait>) {
        (&mut self.class, &mut self.interface, &mut self.trait_def)
    }
}

impl DeclarationContainer for Namespace {
    fn slots(&self) -> (&Option<Class>, &Option<Interface>, &Option<Trait>) {
        (&self.class, &self.interface, &self.trait_def)
    }

    fn slots_mut(&mut self) -> (&mut Option<Class>, &mut Option<Interface>, &mut Option<Trait>) {
        (&mut self.class, &mut self.interface, &mut self.trait_def)
    }
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        filename: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_file(mut self, file: File) -> Self {
        self.file = file;
        self
    }

    pub fn with_auto_import(mut self, auto_import: bool) -> Self {
        self.auto_import = Some(auto_import);
        self
    }

    /// Reads a template from a JSON file. Ids present in the file are kept;
    /// missing ones stay missing.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SchemaError::io(path, e))?;
        let template = convert::deserialize(&text)?;
        debug!(path = %path.display(), name = %template.name, "read template");
        Ok(template)
    }

    /// Writes the editing JSON (ids included) so a later session can resume.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SchemaError> {
        let path = path.as_ref();
        let json = convert::to_editing_json(self)?;
        fs::write(path, json).map_err(|e| SchemaError::io(path, e))
    }

    /// Writes the generator-facing export JSON.
    pub fn export_to_file<P: AsRef<Path>>(&self, path: P, mode: ExportMode) -> Result<(), SchemaError> {
        let path = path.as_ref();
        let json = convert::serialize_with(self, mode)?;
        fs::write(path, json).map_err(|e| SchemaError::io(path, e))
    }
}

impl File {
    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.set_declaration(declaration);
        self
    }

    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    pub fn with_use(mut self, statement: IndexedString) -> Self {
        self.uses.get_or_insert_with(Vec::new).push(statement);
        self
    }

    /// True when neither a declaration nor a namespace is present
    pub fn is_empty(&self) -> bool {
        !self.has_declaration() && self.namespace.is_none()
    }
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.set_declaration(declaration);
        self
    }

    pub fn with_use(mut self, statement: IndexedString) -> Self {
        self.uses.get_or_insert_with(Vec::new).push(statement);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample() -> Template {
        Template::new("Entity", "<%name%>Entity", "src/Entity").with_file(
            File::default()
                .with_strict(true)
                .with_use(IndexedString::with_id("u1", "App\\Base"))
                .with_namespace(
                    Namespace::new("App\\Entity")
                        .with_declaration(Declaration::empty(DeclarationKind::Class, "Entity")),
                ),
        )
    }

    #[test]
    fn test_write_and_read_file() {
        let template = sample();
        let temp_file = NamedTempFile::new().unwrap();

        template.write_to_file(temp_file.path()).unwrap();
        let loaded = Template::read_from_file(temp_file.path()).unwrap();

        assert_eq!(loaded, template);
    }

    #[test]
    fn test_export_to_file_strips_ids() {
        let temp_file = NamedTempFile::new().unwrap();
        sample().export_to_file(temp_file.path(), ExportMode::Typed).unwrap();

        let text = fs::read_to_string(temp_file.path()).unwrap();
        assert!(!text.contains("\"id\""));
        assert!(text.contains("\"App\\\\Base\""));
    }

    #[test]
    fn test_read_missing_file() {
        let err = Template::read_from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
    }

    #[test]
    fn test_trait_and_use_keys() {
        let file = File::default()
            .with_declaration(Declaration::empty(DeclarationKind::Trait, "Loggable"))
            .with_use(IndexedString::new("Psr\\Log"));
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["trait"]["name"], "Loggable");
        assert_eq!(json["use"][0]["value"], "Psr\\Log");
    }

    #[test]
    fn test_declaration_container() {
        let mut file = File::default();
        assert!(file.is_empty());

        file.set_declaration(Declaration::empty(DeclarationKind::Interface, "Shape"));
        assert_eq!(file.declaration_kinds(), vec![DeclarationKind::Interface]);

        file.declaration_mut(DeclarationKind::Interface)
            .unwrap()
            .set_name("Polygon".to_string());
        assert_eq!(file.interface.as_ref().unwrap().name, "Polygon");
        assert!(file.declaration_mut(DeclarationKind::Class).is_none());

        let taken = file.take_declaration(DeclarationKind::Interface).unwrap();
        assert_eq!(taken.name(), "Polygon");
        assert!(file.is_empty());
    }
}
