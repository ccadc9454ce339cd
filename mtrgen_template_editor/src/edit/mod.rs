// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

mod apply;
/// Edit operations and the references they use to address parts of a
/// template.
mod types;

pub use apply::EditContext;
pub use types::{DeclarationRef, Edit, ListRef, Scope};
