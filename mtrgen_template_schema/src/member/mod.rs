// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

mod builder;
/// Members of a declaration: constants, methods (with their parameters) and
/// properties. Each carries an optional editing `id`.
mod types;

pub use types::{Constant, Member, MemberKind, Method, Param, Prop};
