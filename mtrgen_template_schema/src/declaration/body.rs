// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use super::types::{Class, DeclarationKind, Interface, Trait};
use crate::indexed::IndexedString;
use crate::member::{Constant, Method, Prop};
use crate::modifiers::Modifier;

/// Uniform mutable access to the parts of a class, interface or trait.
///
/// Accessors for parts a declaration kind does not have return `None`
/// (interfaces have no props, traits have no constants, only classes carry
/// a modifier, implements-list or trait uses).
pub trait DeclarationBody {
    fn kind(&self) -> DeclarationKind;
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
    fn comments_mut(&mut self) -> &mut Option<Vec<IndexedString>>;
    fn methods_mut(&mut self) -> &mut Option<Vec<Method>>;

    fn extends_mut(&mut self) -> Option<&mut Option<String>> {
        None
    }

    fn modifier_mut(&mut self) -> Option<&mut Option<Modifier>> {
        None
    }

    fn implements_mut(&mut self) -> Option<&mut Option<Vec<IndexedString>>> {
        None
    }

    fn traits_mut(&mut self) -> Option<&mut Option<Vec<IndexedString>>> {
        None
    }

    fn constants_mut(&mut self) -> Option<&mut Option<Vec<Constant>>> {
        None
    }

    fn props_mut(&mut self) -> Option<&mut Option<Vec<Prop>>> {
        None
    }
}

impl DeclarationBody for Class {
    fn kind(&self) -> DeclarationKind {
        DeclarationKind::Class
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn comments_mut(&mut self) -> &mut Option<Vec<IndexedString>> {
        &mut self.comments
    }

    fn methods_mut(&mut self) -> &mut Option<Vec<Method>> {
        &mut self.methods
    }

    fn extends_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.extends)
    }

    fn modifier_mut(&mut self) -> Option<&mut Option<Modifier>> {
        Some(&mut self.modifier)
    }

    fn implements_mut(&mut self) -> Option<&mut Option<Vec<IndexedString>>> {
        Some(&mut self.implements)
    }

    fn traits_mut(&mut self) -> Option<&mut Option<Vec<IndexedString>>> {
        Some(&mut self.traits)
    }

    fn constants_mut(&mut self) -> Option<&mut Option<Vec<Constant>>> {
        Some(&mut self.constants)
    }

    fn props_mut(&mut self) -> Option<&mut Option<Vec<Prop>>> {
        Some(&mut self.props)
    }
}

impl DeclarationBody for Interface {
    fn kind(&self) -> DeclarationKind {
        DeclarationKind::Interface
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn comments_mut(&mut self) -> &mut Option<Vec<IndexedString>> {
        &mut self.comments
    }

    fn methods_mut(&mut self) -> &mut Option<Vec<Method>> {
        &mut self.methods
    }

    fn extends_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.extends)
    }

    fn constants_mut(&mut self) -> Option<&mut Option<Vec<Constant>>> {
        Some(&mut self.constants)
    }
}

impl DeclarationBody for Trait {
    fn kind(&self) -> DeclarationKind {
        DeclarationKind::Trait
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn comments_mut(&mut self) -> &mut Option<Vec<IndexedString>> {
        &mut self.comments
    }

    fn methods_mut(&mut self) -> &mut Option<Vec<Method>> {
        &mut self.methods
    }

    fn props_mut(&mut self) -> Option<&mut Option<Vec<Prop>>> {
        Some(&mut self.props)
    }
}
