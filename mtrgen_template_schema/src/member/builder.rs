// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! Value-style builders: every `with_*` call consumes the member and returns
//! the updated copy, so an edit never shares state with the previous tree.

use super::types::{Constant, Method, Param, Prop};
use crate::id::Id;
use crate::indexed::IndexedString;
use crate::modifiers::{Modifier, Visibility};
use crate::value::Value;

impl Constant {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_comment(mut self, comment: IndexedString) -> Self {
        self.comments.get_or_insert_with(Vec::new).push(comment);
        self
    }

    pub fn visibility_or_default(&self) -> Visibility {
        self.visibility.unwrap_or_default()
    }
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = Some(is_static);
        self
    }

    pub fn with_return(mut self, return_type: impl Into<String>, nullable: bool) -> Self {
        self.return_type = Some(return_type.into());
        self.nullable = Some(nullable);
        self
    }

    pub fn returning_ref(mut self, by_ref: bool) -> Self {
        self.by_ref = Some(by_ref);
        self
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.get_or_insert_with(Vec::new).push(param);
        self
    }

    /// Declares an empty parameter list, as opposed to leaving it absent.
    pub fn without_params(mut self) -> Self {
        self.params = Some(Vec::new());
        self
    }

    pub fn with_body_line(mut self, line: IndexedString) -> Self {
        self.body.get_or_insert_with(Vec::new).push(line);
        self
    }

    pub fn with_comment(mut self, comment: IndexedString) -> Self {
        self.comments.get_or_insert_with(Vec::new).push(comment);
        self
    }

    pub fn visibility_or_default(&self) -> Visibility {
        self.visibility.unwrap_or_default()
    }
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn with_ref(mut self, by_ref: bool) -> Self {
        self.by_ref = Some(by_ref);
        self
    }

    pub fn promoted(mut self, promoted: bool) -> Self {
        self.promoted = Some(promoted);
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Prop {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = Some(is_static);
        self
    }

    /// Sets the default value and marks the property as initialised.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self.init = Some(true);
        self
    }

    pub fn with_accessors(mut self, getter: bool, setter: bool) -> Self {
        self.getter = Some(getter);
        self.setter = Some(setter);
        self
    }

    pub fn with_comment(mut self, comment: IndexedString) -> Self {
        self.comments.get_or_insert_with(Vec::new).push(comment);
        self
    }

    pub fn visibility_or_default(&self) -> Visibility {
        self.visibility.unwrap_or_default()
    }
}
