// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use super::types::{Class, Interface, Trait};
use crate::indexed::IndexedString;
use crate::member::{Constant, Method, Prop};
use crate::modifiers::Modifier;

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn extending(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn implementing(mut self, interface: IndexedString) -> Self {
        self.implements.get_or_insert_with(Vec::new).push(interface);
        self
    }

    pub fn using_trait(mut self, name: IndexedString) -> Self {
        self.traits.get_or_insert_with(Vec::new).push(name);
        self
    }

    pub fn with_comment(mut self, comment: IndexedString) -> Self {
        self.comments.get_or_insert_with(Vec::new).push(comment);
        self
    }

    pub fn with_constant(mut self, constant: Constant) -> Self {
        self.constants.get_or_insert_with(Vec::new).push(constant);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.get_or_insert_with(Vec::new).push(method);
        self
    }

    pub fn with_prop(mut self, prop: Prop) -> Self {
        self.props.get_or_insert_with(Vec::new).push(prop);
        self
    }
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn extending(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn with_comment(mut self, comment: IndexedString) -> Self {
        self.comments.get_or_insert_with(Vec::new).push(comment);
        self
    }

    pub fn with_constant(mut self, constant: Constant) -> Self {
        self.constants.get_or_insert_with(Vec::new).push(constant);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.get_or_insert_with(Vec::new).push(method);
        self
    }
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_comment(mut self, comment: IndexedString) -> Self {
        self.comments.get_or_insert_with(Vec::new).push(comment);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.get_or_insert_with(Vec::new).push(method);
        self
    }

    pub fn with_prop(mut self, prop: Prop) -> Self {
        self.props.get_or_insert_with(Vec::new).push(prop);
        self
    }
}
