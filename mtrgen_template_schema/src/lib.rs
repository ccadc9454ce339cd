// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//!
//! Data model for MTRGen code-generation templates.
//!
//! A [`Template`] describes one generated source file: a class, interface or
//! trait (optionally wrapped in a namespace) with its constants, methods,
//! properties, comments and use-statements.
//!
//! Two JSON projections of the tree exist:
//!
//!  * **editing JSON** ([`convert::to_editing_json`]) keeps every `id` so an
//!    editing session can address list entries after a reload;
//!  * **export JSON** ([`convert::serialize`]) is what the generator consumes:
//!    no `id` keys, and every [`IndexedString`] collapsed to its bare string.
//!
//! Parsing ([`convert::deserialize`] and friends) is structural only. Ids
//! are never invented here; that is the editor's job.
//!

pub mod convert;
pub mod declaration;
pub mod entries;
pub mod export;
pub mod member;
pub mod visit;

mod error;
mod id;
mod indexed;
mod modifiers;
mod template;
mod value;

pub use declaration::{Class, Declaration, DeclarationBody, DeclarationKind, Interface, Trait};
pub use error::SchemaError;
pub use export::{Export, ExportMode};
pub use id::{Id, Identified};
pub use indexed::{IndexedString, strings};
pub use member::{Constant, Member, MemberKind, Method, Param, Prop};
pub use modifiers::{Modifier, Visibility};
pub use template::{DeclarationContainer, File, Namespace, Template};
pub use value::Value;
