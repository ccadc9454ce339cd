// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! Document-order traversal of identity-keyed entries.
//!
//! File uses come first, then the file's declaration, then the namespace's
//! uses and declaration. Inside a declaration: comments, implements, traits,
//! constants, methods (each followed by its comments, body and params) and
//! props.

use crate::declaration::{DeclarationBody, DeclarationKind};
use crate::id::Identified;
use crate::member::{Constant, Member, Method, Prop};
use crate::template::{DeclarationContainer, Template};

pub type Visit<'v> = dyn FnMut(&mut dyn Identified) + 'v;

/// Visits every indexed string, constant, method, param and prop.
pub fn template(template: &mut Template, visit: &mut Visit<'_>) {
    let file = &mut template.file;
    each(&mut file.uses, visit);
    container(file, visit);

    if let Some(namespace) = file.namespace.as_mut() {
        each(&mut namespace.uses, visit);
        container(namespace, visit);
    }
}

/// Visits a member and the entries nested in it.
pub fn member(member: &mut Member, visit: &mut Visit<'_>) {
    match member {
        Member::Constant(c) => constant(c, visit),
        Member::Method(m) => method(m, visit),
        Member::Prop(p) => prop(p, visit),
    }
}

fn container(container: &mut dyn DeclarationContainer, visit: &mut Visit<'_>) {
    for kind in DeclarationKind::ALL {
        if let Some(body) = container.declaration_mut(kind) {
            declaration(body, visit);
        }
    }
}

fn declaration(body: &mut dyn DeclarationBody, visit: &mut Visit<'_>) {
    each(body.comments_mut(), visit);
    if let Some(implements) = body.implements_mut() {
        each(implements, visit);
    }
    if let Some(traits) = body.traits_mut() {
        each(traits, visit);
    }

    if let Some(constants) = body.constants_mut() {
        for c in constants.iter_mut().flatten() {
            constant(c, visit);
        }
    }
    for m in body.methods_mut().iter_mut().flatten() {
        method(m, visit);
    }
    if let Some(props) = body.props_mut() {
        for p in props.iter_mut().flatten() {
            prop(p, visit);
        }
    }
}

fn constant(constant: &mut Constant, visit: &mut Visit<'_>) {
    visit(constant);
    each(&mut constant.comments, visit);
}

fn method(method: &mut Method, visit: &mut Visit<'_>) {
    visit(method);
    each(&mut method.comments, visit);
    each(&mut method.body, visit);
    each(&mut method.params, visit);
}

fn prop(prop: &mut Prop, visit: &mut Visit<'_>) {
    visit(prop);
    each(&mut prop.comments, visit);
}

fn each<T: Identified>(entries: &mut Option<Vec<T>>, visit: &mut Visit<'_>) {
    for entry in entries.iter_mut().flatten() {
        visit(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Class, Declaration, File, Id, IndexedString, Namespace, Param};

    #[test]
    fn test_visits_in_document_order() {
        let mut tree = Template::new("T", "f", "p").with_file(
            File::default()
                .with_use(IndexedString::with_id("u1", "A"))
                .with_namespace(Namespace::new("App").with_use(IndexedString::with_id("u2", "B")).with_declaration(
                    Declaration::Class(
                        Class::new("C")
                            .with_comment(IndexedString::with_id("c1", "doc"))
                            .with_prop(Prop::new("p").with_id("p1"))
                            .with_method(
                                Method::new("m")
                                    .with_id("m1")
                                    .with_body_line(IndexedString::with_id("b1", "return;"))
                                    .with_param(Param::new("a").with_id("a1")),
                            ),
                    ),
                )),
        );

        let mut order = Vec::new();
        template(&mut tree, &mut |entry| order.extend(entry.id().cloned()));
        let expected: Vec<Id> = ["u1", "u2", "c1", "m1", "b1", "a1", "p1"]
            .into_iter()
            .map(Id::from)
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_member_includes_nested_entries() {
        let mut method = Member::Method(
            Method::new("m")
                .with_id("m1")
                .with_comment(IndexedString::with_id("c1", "doc"))
                .with_param(Param::new("a").with_id("a1")),
        );
        let mut count = 0;
        member(&mut method, &mut |_| count += 1);
        assert_eq!(count, 3);
    }
}
