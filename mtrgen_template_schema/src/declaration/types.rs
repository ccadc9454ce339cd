// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::indexed::IndexedString;
use crate::member::{Constant, Method, Prop};
use crate::modifiers::Modifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A class definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Class {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<IndexedString>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constants: Option<Vec<Constant>>,
    /// Single parent class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    /// Interface names; unlike `extends` this is a list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implements: Option<Vec<IndexedString>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<Method>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Modifier>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Vec<Prop>>,
    /// Traits used by the class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<IndexedString>>,
}

/// An interface definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<IndexedString>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constants: Option<Vec<Constant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<Method>>,
    #[serde(default)]
    pub name: String,
}

/// A trait definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<IndexedString>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<Method>>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Vec<Prop>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Class,
    Interface,
    Trait,
}

impl DeclarationKind {
    pub const ALL: [DeclarationKind; 3] = [
        DeclarationKind::Class,
        DeclarationKind::Interface,
        DeclarationKind::Trait,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Trait => "trait",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one type declaration a file or namespace holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Declaration {
    Class(Class),
    Interface(Interface),
    Trait(Trait),
}

impl Declaration {
    /// An empty declaration of the given kind
    pub fn empty(kind: DeclarationKind, name: impl Into<String>) -> Self {
        let name = name.into();
        match kind {
            DeclarationKind::Class => Declaration::Class(Class::new(name)),
            DeclarationKind::Interface => Declaration::Interface(Interface::new(name)),
            DeclarationKind::Trait => Declaration::Trait(Trait::new(name)),
        }
    }

    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Class(_) => DeclarationKind::Class,
            Declaration::Interface(_) => DeclarationKind::Interface,
            Declaration::Trait(_) => DeclarationKind::Trait,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Declaration::Class(c) => &c.name,
            Declaration::Interface(i) => &i.name,
            Declaration::Trait(t) => &t.name,
        }
    }
}
