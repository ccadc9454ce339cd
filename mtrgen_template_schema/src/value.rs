// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use serde::{Deserialize, Deserializer};

/// Default value of a constant, parameter or property: array, bool, number,
/// string-keyed mapping, null or string.
pub type Value = serde_json::Value;

/// Deserializes an optional [`Value`] so that an explicit JSON `null` is kept
/// as `Some(Value::Null)`. Combined with `#[serde(default)]`, a missing key
/// stays `None`.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
