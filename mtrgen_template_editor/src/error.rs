// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::edit::{DeclarationRef, Scope};
use mtrgen_template_schema::{DeclarationKind, Id, MemberKind, SchemaError};
use thiserror::Error;

/// Why an [`Edit`](crate::Edit) could not be applied. The template is left
/// as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("no {0}")]
    DeclarationNotFound(DeclarationRef),

    #[error("the file has no namespace")]
    NamespaceNotFound,

    #[error("no {kind} with id {id}")]
    MemberNotFound { kind: MemberKind, id: Id },

    #[error("no entry with id {id} in {list}")]
    EntryNotFound { list: &'static str, id: Id },

    #[error("method {method} has no param with id {id}")]
    ParamNotFound { method: Id, id: Id },

    #[error("{0} scope already holds a declaration")]
    ScopeOccupied(Scope),

    #[error("a {kind} has no {part}")]
    Unsupported {
        kind: DeclarationKind,
        part: &'static str,
    },

    #[error("replacement {0} carries no id")]
    MissingId(&'static str),
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("edit failed: {0}")]
    Edit(#[from] EditError),

    #[error("edit #{index} failed: {source}")]
    Script {
        index: usize,
        #[source]
        source: EditError,
    },
}
