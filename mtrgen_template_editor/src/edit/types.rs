// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use mtrgen_template_schema::{DeclarationKind, Id, Member, MemberKind, Modifier, Param};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a declaration lives: directly in the file, or inside its namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    File,
    Namespace,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::File => f.write_str("file"),
            Scope::Namespace => f.write_str("namespace"),
        }
    }
}

/// Addresses the class, interface or trait of one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRef {
    pub scope: Scope,
    pub kind: DeclarationKind,
}

impl DeclarationRef {
    pub fn new(scope: Scope, kind: DeclarationKind) -> Self {
        Self { scope, kind }
    }

    pub fn file(kind: DeclarationKind) -> Self {
        Self::new(Scope::File, kind)
    }

    pub fn namespace(kind: DeclarationKind) -> Self {
        Self::new(Scope::Namespace, kind)
    }
}

impl fmt::Display for DeclarationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {} scope", self.kind, self.scope)
    }
}

/// One of the indexed-string lists of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListRef {
    FileUse,
    NamespaceUse,
    Comments {
        target: DeclarationRef,
    },
    Implements {
        target: DeclarationRef,
    },
    Traits {
        target: DeclarationRef,
    },
    MemberComments {
        target: DeclarationRef,
        member_kind: MemberKind,
        member: Id,
    },
    MethodBody {
        target: DeclarationRef,
        method: Id,
    },
}

impl ListRef {
    pub fn name(&self) -> &'static str {
        match self {
            ListRef::FileUse => "file use",
            ListRef::NamespaceUse => "namespace use",
            ListRef::Comments { .. } => "comments",
            ListRef::Implements { .. } => "implements",
            ListRef::Traits { .. } => "traits",
            ListRef::MemberComments { .. } => "member comments",
            ListRef::MethodBody { .. } => "method body",
        }
    }
}

/// A single change to a template.
///
/// Edits are plain data: a script of them can be stored as JSON and replayed
/// (`{"op": "set_name", "name": "Entity"}`). Names left out of `add_*`
/// operations fall back to the configured defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    SetName {
        name: String,
    },
    SetFilename {
        filename: String,
    },
    SetPath {
        path: String,
    },
    SetAutoImport {
        value: Option<bool>,
    },
    SetStrict {
        value: Option<bool>,
    },

    /// Wraps the file in a namespace. A declaration held directly by the
    /// file moves into it.
    AddNamespace {
        #[serde(default)]
        name: Option<String>,
    },
    RemoveNamespace,
    SetNamespaceName {
        name: String,
    },

    AddDeclaration {
        scope: Scope,
        kind: DeclarationKind,
        #[serde(default)]
        name: Option<String>,
    },
    RemoveDeclaration {
        target: DeclarationRef,
    },
    SetDeclarationName {
        target: DeclarationRef,
        name: String,
    },
    SetExtends {
        target: DeclarationRef,
        extends: Option<String>,
    },
    SetModifier {
        target: DeclarationRef,
        modifier: Option<Modifier>,
    },

    AddEntry {
        list: ListRef,
        #[serde(default)]
        value: String,
    },
    ChangeEntry {
        list: ListRef,
        id: Id,
        value: String,
    },
    RemoveEntry {
        list: ListRef,
        id: Id,
    },

    AddMember {
        target: DeclarationRef,
        kind: MemberKind,
        #[serde(default)]
        name: Option<String>,
    },
    /// Replaces the member carrying the same id, keeping its position.
    ReplaceMember {
        target: DeclarationRef,
        member: Member,
    },
    RemoveMember {
        target: DeclarationRef,
        kind: MemberKind,
        id: Id,
    },

    AddParam {
        target: DeclarationRef,
        method: Id,
        #[serde(default)]
        name: Option<String>,
    },
    ReplaceParam {
        target: DeclarationRef,
        method: Id,
        param: Param,
    },
    RemoveParam {
        target: DeclarationRef,
        method: Id,
        id: Id,
    },

    /// Replaces the body with one line entry per `\n`-separated line.
    SetMethodBody {
        target: DeclarationRef,
        method: Id,
        text: String,
    },
    /// Sets a property default from text; `init` follows whether the text
    /// is non-empty.
    SetPropValue {
        target: DeclarationRef,
        prop: Id,
        value: String,
    },
}

impl Edit {
    /// The `op` tag of this edit
    pub fn name(&self) -> &'static str {
        match self {
            Edit::SetName { .. } => "set_name",
            Edit::SetFilename { .. } => "set_filename",
            Edit::SetPath { .. } => "set_path",
            Edit::SetAutoImport { .. } => "set_auto_import",
            Edit::SetStrict { .. } => "set_strict",
            Edit::AddNamespace { .. } => "add_namespace",
            Edit::RemoveNamespace => "remove_namespace",
            Edit::SetNamespaceName { .. } => "set_namespace_name",
            Edit::AddDeclaration { .. } => "add_declaration",
            Edit::RemoveDeclaration { .. } => "remove_declaration",
            Edit::SetDeclarationName { .. } => "set_declaration_name",
            Edit::SetExtends { .. } => "set_extends",
            Edit::SetModifier { .. } => "set_modifier",
            Edit::AddEntry { .. } => "add_entry",
            Edit::ChangeEntry { .. } => "change_entry",
            Edit::RemoveEntry { .. } => "remove_entry",
            Edit::AddMember { .. } => "add_member",
            Edit::ReplaceMember { .. } => "replace_member",
            Edit::RemoveMember { .. } => "remove_member",
            Edit::AddParam { .. } => "add_param",
            Edit::ReplaceParam { .. } => "replace_param",
            Edit::RemoveParam { .. } => "remove_param",
            Edit::SetMethodBody { .. } => "set_method_body",
            Edit::SetPropValue { .. } => "set_prop_value",
        }
    }
}
