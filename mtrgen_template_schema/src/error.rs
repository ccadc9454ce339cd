// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    /// The input was not well-formed JSON, or did not have the structure of
    /// the requested entity.
    #[error("failed to parse template JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to encode template JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SchemaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SchemaError::Io {
            path: path.into(),
            source,
        }
    }
}
