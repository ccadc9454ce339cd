// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

mod body;
mod builder;
/// Type declarations a template can generate: classes, interfaces and
/// traits.
///
/// # Example
/// ```
/// use mtrgen_template_schema::{Class, Method, Modifier, IndexedString};
///
/// let class = Class::new("UserRepository")
///     .with_modifier(Modifier::Final)
///     .extending("Repository")
///     .implementing(IndexedString::new("Countable"))
///     .with_method(Method::new("count").with_return("int", false));
///
/// assert_eq!(class.methods.unwrap().len(), 1);
/// ```
mod types;

pub use body::DeclarationBody;
pub use types::{Class, Declaration, DeclarationKind, Interface, Trait};
