// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use ron::de::from_reader;
use ron::ser::{PrettyConfig, to_writer_pretty};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "mtrgen.ron";
pub const CONFIG_ENV: &str = "MTRGEN_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot open config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to write config: {0}")]
    Encode(#[from] ron::Error),
}

/// Contents of `mtrgen.ron`. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub defaults: TemplateDefaults,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
}

/// Initial values for nodes created while editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateDefaults {
    pub name: String,
    pub filename: String,
    pub path: String,
    /// Placeholder name of a namespace created implicitly
    pub namespace: String,
    pub method: String,
    pub constant: String,
    /// Initial constant value, stored as a string
    pub constant_value: String,
    pub prop: String,
    pub param: String,
    pub param_type: String,
}

impl Default for TemplateDefaults {
    fn default() -> Self {
        Self {
            name: "Template".to_string(),
            filename: "<%name%>Template".to_string(),
            path: "<%path%>".to_string(),
            namespace: "Namespace".to_string(),
            method: "method".to_string(),
            constant: "CONSTANT".to_string(),
            constant_value: "0".to_string(),
            prop: "prop".to_string(),
            param: "param".to_string(),
            param_type: "string".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportStyle {
    #[default]
    Typed,
    ShapeBased,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub style: ExportStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `MTRGEN_LOG` is unset
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl TemplateConfig {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        from_reader(file).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        to_writer_pretty(file, self, PrettyConfig::default())?;
        Ok(())
    }

    /// Picks the config file to use: an explicit path wins, then the
    /// `MTRGEN_CONFIG` value, then `mtrgen.ron` in `dir` if it exists.
    pub fn resolve_path(explicit: Option<&str>, from_env: Option<&str>, dir: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit.or(from_env) {
            return Some(PathBuf::from(path));
        }
        let local = dir.join(CONFIG_FILE);
        local.exists().then_some(local)
    }

    /// Loads the effective configuration, falling back to built-in defaults
    /// when no file is found.
    pub fn load(explicit: Option<&str>) -> Result<Self, ConfigError> {
        let from_env = std::env::var(CONFIG_ENV).ok();
        match Self::resolve_path(explicit, from_env.as_deref(), Path::new(".")) {
            Some(path) => Self::read_from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_write_and_read_config() {
        let mut config = TemplateConfig::default();
        config.defaults.namespace = "App".to_string();
        config.export.style = ExportStyle::ShapeBased;

        let temp_file = NamedTempFile::new().unwrap();
        config.write_to_file(temp_file.path()).unwrap();

        let loaded = TemplateConfig::read_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "(defaults: (method: \"handle\"))").unwrap();

        let loaded = TemplateConfig::read_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.defaults.method, "handle");
        assert_eq!(loaded.defaults.name, "Template");
        assert_eq!(loaded.export.style, ExportStyle::Typed);
        assert_eq!(loaded.logging.level, "warn");
    }

    #[test]
    fn test_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "(defaults: 12").unwrap();

        let err = TemplateConfig::read_from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_resolve_path_precedence() {
        let dir = tempdir().unwrap();
        assert_eq!(TemplateConfig::resolve_path(None, None, dir.path()), None);

        std::fs::write(dir.path().join(CONFIG_FILE), "()").unwrap();
        assert_eq!(
            TemplateConfig::resolve_path(None, None, dir.path()),
            Some(dir.path().join(CONFIG_FILE))
        );
        assert_eq!(
            TemplateConfig::resolve_path(None, Some("env.ron"), dir.path()),
            Some(PathBuf::from("env.ron"))
        );
        assert_eq!(
            TemplateConfig::resolve_path(Some("cli.ron"), Some("env.ron"), dir.path()),
            Some(PathBuf::from("cli.ron"))
        );
    }
}
