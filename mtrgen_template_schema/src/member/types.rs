// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::id::{Id, Identified};
use crate::indexed::IndexedString;
use crate::modifiers::{Modifier, Visibility};
use crate::value::{Value, present};
use serde::{Deserialize, Serialize};
use std::fmt;

// Fields are declared in JSON key order so editing and export output agree.

/// A class or interface constant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<IndexedString>>,
    #[serde(default)]
    pub name: String,
    /// Always exported. A constant parsed without a value holds `Null` and
    /// exports as `"value": null`.
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

/// A method of a class, interface or trait
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Method {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    /// One entry per source line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<IndexedString>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<IndexedString>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Modifier>,
    #[serde(default)]
    pub name: String,
    /// Applies to the return type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Param>>,
    /// Return by reference
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub by_ref: Option<bool>,
    #[serde(rename = "return", default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

/// A method parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Param {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    /// Constructor promotion: the parameter also declares a property
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promoted: Option<bool>,
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub by_ref: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// A class or trait property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<IndexedString>>,
    /// Generate a getter for this property
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter: Option<bool>,
    /// True iff a default value is present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init: Option<bool>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    /// Generate a setter for this property
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter: Option<bool>,
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

macro_rules! identified {
    ($($ty:ty),*) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> Option<&Id> {
                    self.id.as_ref()
                }

                fn set_id(&mut self, id: Id) {
                    self.id = Some(id);
                }
            }
        )*
    };
}

identified!(Constant, Method, Param, Prop);

/// Which member list of a declaration an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Constant,
    Method,
    Prop,
}

impl MemberKind {
    /// The JSON key of the list holding members of this kind
    pub fn list_name(&self) -> &'static str {
        match self {
            MemberKind::Constant => "constants",
            MemberKind::Method => "methods",
            MemberKind::Prop => "props",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemberKind::Constant => "constant",
            MemberKind::Method => "method",
            MemberKind::Prop => "prop",
        };
        f.write_str(name)
    }
}

/// Any one member of a declaration, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Member {
    Constant(Constant),
    Method(Method),
    Prop(Prop),
}

impl Member {
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Constant(_) => MemberKind::Constant,
            Member::Method(_) => MemberKind::Method,
            Member::Prop(_) => MemberKind::Prop,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Member::Constant(c) => &c.name,
            Member::Method(m) => &m.name,
            Member::Prop(p) => &p.name,
        }
    }

    pub fn comments_mut(&mut self) -> &mut Option<Vec<IndexedString>> {
        match self {
            Member::Constant(c) => &mut c.comments,
            Member::Method(m) => &mut m.comments,
            Member::Prop(p) => &mut p.comments,
        }
    }
}

impl Identified for Member {
    fn id(&self) -> Option<&Id> {
        match self {
            Member::Constant(c) => c.id(),
            Member::Method(m) => m.id(),
            Member::Prop(p) => p.id(),
        }
    }

    fn set_id(&mut self, id: Id) {
        match self {
            Member::Constant(c) => c.set_id(id),
            Member::Method(m) => m.set_id(id),
            Member::Prop(p) => p.set_id(id),
        }
    }
}
