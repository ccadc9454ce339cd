// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::{ArgsError, TemplateArgs, TemplateCommand};
pub use config::{ConfigError, ExportStyle, TemplateConfig, TemplateDefaults};
