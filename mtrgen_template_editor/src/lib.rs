// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.
//!
//! Editing layer for MTRGen templates.
//!
//! Every change to a template is an [`Edit`]: a serializable description of
//! one operation that addresses list entries by their [`Id`], never by
//! position. Applying an edit produces a new tree and leaves the input
//! untouched, so a [`TemplateSession`] can reject a failed script without
//! any rollback logic.
//!
//! [`Id`]: mtrgen_template_schema::Id

mod assign;
mod edit;
mod error;
mod ids;
mod session;

pub use assign::assign_ids;
pub use edit::{DeclarationRef, Edit, EditContext, ListRef, Scope};
pub use error::{EditError, EditorError};
pub use ids::{IdGenerator, SequentialIds, UlidIds};
pub use session::{ChangeListener, TemplateSession};
