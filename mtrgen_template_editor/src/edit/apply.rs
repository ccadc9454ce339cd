// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use super::types::{DeclarationRef, Edit, ListRef, Scope};
use crate::assign::{assign_ids, collect_ids};
use crate::error::EditError;
use crate::ids::IdGenerator;
use mtrgen_template_common::TemplateDefaults;
use mtrgen_template_schema::{entries, visit};
use mtrgen_template_schema::{
    Constant, Declaration, DeclarationBody, DeclarationContainer, DeclarationKind, Id, Identified,
    IndexedString, Member, MemberKind, Method, Namespace, Param, Prop, Template, Value,
};
use std::collections::HashSet;
use tracing::debug;

/// What an edit needs besides the tree: a source of fresh ids and the
/// defaults for newly created nodes.
pub struct EditContext<'a> {
    ids: &'a mut dyn IdGenerator,
    defaults: &'a TemplateDefaults,
    taken: HashSet<Id>,
}

impl<'a> EditContext<'a> {
    pub fn new(ids: &'a mut dyn IdGenerator, defaults: &'a TemplateDefaults) -> Self {
        Self {
            ids,
            defaults,
            taken: HashSet::new(),
        }
    }

    /// A fresh id that does not occur in the tree being edited
    fn fresh_id(&mut self) -> Id {
        loop {
            let id = self.ids.next_id();
            if self.taken.insert(id.clone()) {
                return id;
            }
        }
    }
}

impl IdGenerator for EditContext<'_> {
    fn next_id(&mut self) -> Id {
        self.fresh_id()
    }
}

impl Edit {
    /// Applies the edit to a copy of `template` and returns the copy.
    ///
    /// Entries that end up without an id (for instance comments inside a
    /// replacement member) are given one, so the result stays fully
    /// addressable.
    pub fn apply(&self, template: &Template, ctx: &mut EditContext<'_>) -> Result<Template, EditError> {
        let mut next = template.clone();
        ctx.taken = collect_ids(&mut next);

        self.apply_to(&mut next, ctx)?;
        assign_ids(&mut next, ctx);

        debug!(op = self.name(), template = %next.name, "applied edit");
        Ok(next)
    }

    fn apply_to(&self, template: &mut Template, ctx: &mut EditContext<'_>) -> Result<(), EditError> {
        match self {
            Edit::SetName { name } => template.name = name.clone(),
            Edit::SetFilename { filename } => template.filename = filename.clone(),
            Edit::SetPath { path } => template.path = path.clone(),
            Edit::SetAutoImport { value } => template.auto_import = *value,
            Edit::SetStrict { value } => template.file.strict = *value,

            Edit::AddNamespace { name } => {
                let file = &mut template.file;
                if file.namespace.is_some() {
                    return Err(EditError::ScopeOccupied(Scope::Namespace));
                }
                let name = name.clone().unwrap_or_else(|| ctx.defaults.namespace.clone());
                let mut namespace = Namespace::new(name);
                for kind in DeclarationKind::ALL {
                    if let Some(declaration) = file.take_declaration(kind) {
                        namespace.set_declaration(declaration);
                    }
                }
                file.namespace = Some(namespace);
            }
            Edit::RemoveNamespace => {
                template
                    .file
                    .namespace
                    .take()
                    .ok_or(EditError::NamespaceNotFound)?;
            }
            Edit::SetNamespaceName { name } => {
                namespace_mut(template)?.name = name.clone();
            }

            Edit::AddDeclaration { scope, kind, name } => {
                let name = name.clone().unwrap_or_else(|| default_declaration_name(*kind));
                let declaration = Declaration::empty(*kind, name);
                match scope {
                    Scope::File => {
                        let file = &mut template.file;
                        if file.has_declaration() || file.namespace.is_some() {
                            return Err(EditError::ScopeOccupied(Scope::File));
                        }
                        file.set_declaration(declaration);
                    }
                    Scope::Namespace => {
                        let namespace = namespace_or_create(template, ctx.defaults)?;
                        if namespace.has_declaration() {
                            return Err(EditError::ScopeOccupied(Scope::Namespace));
                        }
                        namespace.set_declaration(declaration);
                    }
                }
            }
            Edit::RemoveDeclaration { target } => {
                let removed = match target.scope {
                    Scope::File => template.file.take_declaration(target.kind),
                    Scope::Namespace => namespace_mut(template)?.take_declaration(target.kind),
                };
                removed.ok_or(EditError::DeclarationNotFound(*target))?;
            }
            Edit::SetDeclarationName { target, name } => {
                declaration_mut(template, target)?.set_name(name.clone());
            }
            Edit::SetExtends { target, extends } => {
                let body = declaration_mut(template, target)?;
                let kind = body.kind();
                *body.extends_mut().ok_or(EditError::Unsupported {
                    kind,
                    part: "extends",
                })? = extends.clone();
            }
            Edit::SetModifier { target, modifier } => {
                let body = declaration_mut(template, target)?;
                let kind = body.kind();
                *body.modifier_mut().ok_or(EditError::Unsupported {
                    kind,
                    part: "modifier",
                })? = *modifier;
            }

            Edit::AddEntry { list, value } => {
                let strings = entry_list(template, list, ctx.defaults)?;
                entries::push(strings, IndexedString::with_id(ctx.fresh_id(), value.clone()));
            }
            Edit::ChangeEntry { list, id, value } => {
                let strings = entry_list(template, list, ctx.defaults)?;
                let entry = entries::find_mut(strings, id).ok_or_else(|| EditError::EntryNotFound {
                    list: list.name(),
                    id: id.clone(),
                })?;
                entry.value = value.clone();
            }
            Edit::RemoveEntry { list, id } => {
                let strings = entry_list(template, list, ctx.defaults)?;
                entries::remove(strings, id).ok_or_else(|| EditError::EntryNotFound {
                    list: list.name(),
                    id: id.clone(),
                })?;
            }

            Edit::AddMember { target, kind, name } => {
                let defaults = ctx.defaults;
                let body = declaration_mut(template, target)?;
                match kind {
                    MemberKind::Constant => {
                        let constants = constants_mut(body)?;
                        let name = name.clone().unwrap_or_else(|| defaults.constant.clone());
                        let value = Value::String(defaults.constant_value.clone());
                        entries::push(constants, Constant::new(name, value).with_id(ctx.fresh_id()));
                    }
                    MemberKind::Method => {
                        let name = name.clone().unwrap_or_else(|| defaults.method.clone());
                        entries::push(body.methods_mut(), Method::new(name).with_id(ctx.fresh_id()));
                    }
                    MemberKind::Prop => {
                        let props = props_mut(body)?;
                        let name = name.clone().unwrap_or_else(|| defaults.prop.clone());
                        entries::push(props, Prop::new(name).with_id(ctx.fresh_id()));
                    }
                }
            }
            Edit::ReplaceMember { target, member } => {
                let id = member.id().cloned().ok_or(EditError::MissingId("member"))?;
                let body = declaration_mut(template, target)?;
                let current = match member.kind() {
                    MemberKind::Constant => entries::find(constants_mut(body)?, &id).cloned().map(Member::Constant),
                    MemberKind::Method => entries::find(body.methods_mut(), &id).cloned().map(Member::Method),
                    MemberKind::Prop => entries::find(props_mut(body)?, &id).cloned().map(Member::Prop),
                };
                let mut current = current.ok_or_else(|| EditError::MemberNotFound {
                    kind: member.kind(),
                    id: id.clone(),
                })?;

                let mut incoming = member.clone();
                reissue_foreign_ids(&mut incoming, &mut current, ctx);
                match incoming {
                    Member::Constant(constant) => entries::replace(constants_mut(body)?, &id, constant),
                    Member::Method(method) => entries::replace(body.methods_mut(), &id, method),
                    Member::Prop(prop) => entries::replace(props_mut(body)?, &id, prop),
                };
            }
            Edit::RemoveMember { target, kind, id } => {
                let body = declaration_mut(template, target)?;
                let removed = match kind {
                    MemberKind::Constant => entries::remove(constants_mut(body)?, id).is_some(),
                    MemberKind::Method => entries::remove(body.methods_mut(), id).is_some(),
                    MemberKind::Prop => entries::remove(props_mut(body)?, id).is_some(),
                };
                if !removed {
                    return Err(EditError::MemberNotFound {
                        kind: *kind,
                        id: id.clone(),
                    });
                }
            }

            Edit::AddParam { target, method, name } => {
                let defaults = ctx.defaults;
                let method = method_mut(template, target, method)?;
                let name = name.clone().unwrap_or_else(|| defaults.param.clone());
                let param = Param::new(name)
                    .with_type(defaults.param_type.clone())
                    .with_id(ctx.fresh_id());
                entries::push(&mut method.params, param);
            }
            Edit::ReplaceParam { target, method, param } => {
                let id = param.id().cloned().ok_or(EditError::MissingId("param"))?;
                let found = method_mut(template, target, method)?;
                if !entries::replace(&mut found.params, &id, param.clone()) {
                    return Err(EditError::ParamNotFound {
                        method: method.clone(),
                        id,
                    });
                }
            }
            Edit::RemoveParam { target, method, id } => {
                let found = method_mut(template, target, method)?;
                entries::remove(&mut found.params, id).ok_or_else(|| EditError::ParamNotFound {
                    method: method.clone(),
                    id: id.clone(),
                })?;
            }

            Edit::SetMethodBody { target, method, text } => {
                let method = method_mut(template, target, method)?;
                let lines = text
                    .split('\n')
                    .map(|line| IndexedString::with_id(ctx.fresh_id(), line))
                    .collect();
                method.body = Some(lines);
            }
            Edit::SetPropValue { target, prop, value } => {
                let body = declaration_mut(template, target)?;
                let found = entries::find_mut(props_mut(body)?, prop).ok_or_else(|| {
                    EditError::MemberNotFound {
                        kind: MemberKind::Prop,
                        id: prop.clone(),
                    }
                })?;
                found.value = Some(Value::String(value.clone()));
                found.init = Some(!value.is_empty());
            }
        }
        Ok(())
    }
}

/// Entries of a replacement member that reuse an id held elsewhere in the
/// tree, or repeat one within the member, get a fresh id. Ids the replaced
/// member already owned stay valid.
fn reissue_foreign_ids(incoming: &mut Member, current: &mut Member, ctx: &mut EditContext<'_>) {
    let mut owned = HashSet::new();
    visit::member(current, &mut |entry| owned.extend(entry.id().cloned()));

    let mut seen = HashSet::new();
    visit::member(incoming, &mut |entry| {
        let keep = match entry.id() {
            None => true,
            Some(id) => (owned.contains(id) || !ctx.taken.contains(id)) && seen.insert(id.clone()),
        };
        if !keep {
            entry.set_id(ctx.fresh_id());
        }
    });
}

fn default_declaration_name(kind: DeclarationKind) -> String {
    match kind {
        DeclarationKind::Class => "Class",
        DeclarationKind::Interface => "Interface",
        DeclarationKind::Trait => "Trait",
    }
    .to_string()
}

fn namespace_mut(template: &mut Template) -> Result<&mut Namespace, EditError> {
    template
        .file
        .namespace
        .as_mut()
        .ok_or(EditError::NamespaceNotFound)
}

/// The file's namespace, created with the default name when absent. A file
/// that already holds a declaration directly cannot gain a namespace this
/// way.
fn namespace_or_create<'t>(
    template: &'t mut Template,
    defaults: &TemplateDefaults,
) -> Result<&'t mut Namespace, EditError> {
    let file = &mut template.file;
    if file.namespace.is_none() && file.has_declaration() {
        return Err(EditError::ScopeOccupied(Scope::File));
    }
    Ok(file
        .namespace
        .get_or_insert_with(|| Namespace::new(defaults.namespace.clone())))
}

fn declaration_mut<'t>(
    template: &'t mut Template,
    target: &DeclarationRef,
) -> Result<&'t mut dyn DeclarationBody, EditError> {
    let found = match target.scope {
        Scope::File => template.file.declaration_mut(target.kind),
        Scope::Namespace => namespace_mut(template)?.declaration_mut(target.kind),
    };
    found.ok_or(EditError::DeclarationNotFound(*target))
}

fn constants_mut(body: &mut dyn DeclarationBody) -> Result<&mut Option<Vec<Constant>>, EditError> {
    let kind = body.kind();
    body.constants_mut().ok_or(EditError::Unsupported {
        kind,
        part: "constants",
    })
}

fn props_mut(body: &mut dyn DeclarationBody) -> Result<&mut Option<Vec<Prop>>, EditError> {
    let kind = body.kind();
    body.props_mut().ok_or(EditError::Unsupported { kind, part: "props" })
}

fn method_mut<'t>(
    template: &'t mut Template,
    target: &DeclarationRef,
    id: &Id,
) -> Result<&'t mut Method, EditError> {
    let body = declaration_mut(template, target)?;
    entries::find_mut(body.methods_mut(), id).ok_or_else(|| EditError::MemberNotFound {
        kind: MemberKind::Method,
        id: id.clone(),
    })
}

fn entry_list<'t>(
    template: &'t mut Template,
    list: &ListRef,
    defaults: &TemplateDefaults,
) -> Result<&'t mut Option<Vec<IndexedString>>, EditError> {
    match list {
        ListRef::FileUse => Ok(&mut template.file.uses),
        ListRef::NamespaceUse => Ok(&mut namespace_or_create(template, defaults)?.uses),
        ListRef::Comments { target } => Ok(declaration_mut(template, target)?.comments_mut()),
        ListRef::Implements { target } => {
            let body = declaration_mut(template, target)?;
            let kind = body.kind();
            body.implements_mut().ok_or(EditError::Unsupported {
                kind,
                part: "implements",
            })
        }
        ListRef::Traits { target } => {
            let body = declaration_mut(template, target)?;
            let kind = body.kind();
            body.traits_mut().ok_or(EditError::Unsupported {
                kind,
                part: "traits",
            })
        }
        ListRef::MemberComments {
            target,
            member_kind,
            member,
        } => {
            let body = declaration_mut(template, target)?;
            let comments = match member_kind {
                MemberKind::Constant => {
                    entries::find_mut(constants_mut(body)?, member).map(|c| &mut c.comments)
                }
                MemberKind::Method => {
                    entries::find_mut(body.methods_mut(), member).map(|m| &mut m.comments)
                }
                MemberKind::Prop => entries::find_mut(props_mut(body)?, member).map(|p| &mut p.comments),
            };
            comments.ok_or_else(|| EditError::MemberNotFound {
                kind: *member_kind,
                id: member.clone(),
            })
        }
        ListRef::MethodBody { target, method } => Ok(&mut method_mut(template, target, method)?.body),
    }
}
