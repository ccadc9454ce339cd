// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use thiserror::Error;

/// mtrgen-template commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCommand {
    /// Start a fresh template from the configured defaults
    New,
    /// Load export JSON (or editing JSON) and assign ids
    Import,
    /// Apply an edit script to a template
    Edit,
    /// Write the generator-facing JSON
    Export,
    /// Print an outline of a template
    Show,
}

impl TemplateCommand {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "new" => Some(TemplateCommand::New),
            "import" => Some(TemplateCommand::Import),
            "edit" => Some(TemplateCommand::Edit),
            "export" => Some(TemplateCommand::Export),
            "show" => Some(TemplateCommand::Show),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TemplateCommand::New => "new",
            TemplateCommand::Import => "import",
            TemplateCommand::Edit => "edit",
            TemplateCommand::Export => "export",
            TemplateCommand::Show => "show",
        }
    }

    /// Number of positional arguments the command requires, and the most it
    /// accepts.
    fn arity(&self) -> (usize, usize) {
        match self {
            TemplateCommand::New => (0, 1),
            TemplateCommand::Import | TemplateCommand::Export | TemplateCommand::Show => (1, 1),
            TemplateCommand::Edit => (2, 2),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgsError {
    #[error("no command given")]
    MissingCommand,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("'{command}' expects {expected}, got {actual} argument(s)")]
    WrongArity {
        command: &'static str,
        expected: String,
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateArgs {
    pub command: TemplateCommand,
    /// Positional arguments after the command
    pub inputs: Vec<String>,
    pub output: Option<String>,
    pub config_path: Option<String>,
    pub shape_based: bool,
    pub verbose: bool,
}

impl TemplateArgs {
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: Iterator<Item = String>,
    {
        // Skip the program name
        let args: Vec<String> = args.skip(1).collect();

        let Some(first) = args.first() else {
            return Err(ArgsError::MissingCommand);
        };
        let command =
            TemplateCommand::from_arg(first).ok_or_else(|| ArgsError::UnknownCommand(first.clone()))?;

        let mut inputs = Vec::new();
        let mut output = None;
        let mut config_path = None;
        let mut shape_based = false;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            let arg = args[i].as_str();
            match arg {
                "--output" | "-o" | "--config" => {
                    let value = args
                        .get(i + 1)
                        .cloned()
                        .ok_or_else(|| ArgsError::MissingValue(arg.to_string()))?;
                    if arg == "--config" {
                        config_path = Some(value);
                    } else {
                        output = Some(value);
                    }
                    i += 2;
                }
                "--shape-based" => {
                    shape_based = true;
                    i += 1;
                }
                "--verbose" | "-v" => {
                    verbose = true;
                    i += 1;
                }
                _ if arg.starts_with("--output=") => {
                    output = Some(arg["--output=".len()..].to_string());
                    i += 1;
                }
                _ if arg.starts_with("--config=") => {
                    config_path = Some(arg["--config=".len()..].to_string());
                    i += 1;
                }
                // A lone "-" is a positional meaning stdin
                _ if arg.starts_with('-') && arg != "-" => {
                    return Err(ArgsError::UnknownOption(arg.to_string()));
                }
                _ => {
                    inputs.push(arg.to_string());
                    i += 1;
                }
            }
        }

        let (min, max) = command.arity();
        if inputs.len() < min || inputs.len() > max {
            let expected = if min == max {
                format!("{min}")
            } else {
                format!("{min} to {max}")
            };
            return Err(ArgsError::WrongArity {
                command: command.name(),
                expected,
                actual: inputs.len(),
            });
        }

        Ok(Self {
            command,
            inputs,
            output,
            config_path,
            shape_based,
            verbose,
        })
    }

    /// First positional argument, if any
    pub fn input(&self) -> Option<&str> {
        self.inputs.first().map(String::as_str)
    }
}
