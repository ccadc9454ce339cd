// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.
//!
//! mtrgen-template
//!
//! Command-line front end for authoring MTRGen templates. A template is kept
//! on disk as *editing JSON* (every list entry carries an id so it can be
//! addressed by edit scripts) and handed to the generator as *export JSON*
//! (no ids, indexed strings collapsed to plain strings).
//!
//! The usual flow:
//!
//!   1. `mtrgen-template new Entity -o entity.json` or
//!      `mtrgen-template import exported.json -o entity.json`
//!   2. `mtrgen-template edit entity.json changes.json -o entity.json`
//!   3. `mtrgen-template export entity.json -o EntityTemplate.json`
//!
//! Everything printed for humans goes to stderr; stdout carries JSON only,
//! unless `show` was asked for.
//!

#![warn(rust_2018_idioms, unused_lifetimes)]

mod commands;

use ansi_term::Colour::{Blue, Green, Red};
use ansi_term::Style;
use mtrgen_template_common::{TemplateArgs, TemplateConfig, logging};
use std::env;
use std::process::exit;

fn show_help() {
    println!("{}", help_message());
}

fn show_version() {
    println!(
        "{} {}",
        Style::new().bold().paint("mtrgen-template version"),
        Green.paint(env!("CARGO_PKG_VERSION"))
    );
}

pub fn main() {
    if env::args().any(|a| a == "--help" || a == "-h") {
        show_help();
        return;
    }

    if env::args().any(|a| a == "--version" || a == "-V") {
        show_version();
        return;
    }

    let args = match TemplateArgs::parse(env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{} {}", Red.bold().paint("error:"), e);
            eprintln!("Run {} for usage.", Green.paint("mtrgen-template --help"));
            exit(2);
        }
    };

    let config = match TemplateConfig::load(args.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", Red.bold().paint("error:"), e);
            exit(1);
        }
    };

    logging::init(&config.logging.level, args.verbose);

    if let Err(e) = commands::run(&args, &config) {
        eprintln!("{} {:#}", Red.bold().paint("error:"), e);
        exit(1);
    }
}

pub fn help_message() -> String {
    format!(
        "
{title}: Builds code-generation templates for MTRGen.

{usage_label}:
    mtrgen-template <COMMAND> [ARGS] [OPTIONS]

{commands_label}:
    {new} [NAME]             Create an empty template (editing JSON)
    {import} INPUT           Read export or editing JSON and assign ids
    {edit} INPUT SCRIPT      Apply a JSON array of edits to a template
    {export} INPUT           Write the JSON consumed by the generator
    {show} INPUT             Print an outline of a template

INPUT may be {dash} to read from stdin.

{options_label}:
    -o, --output PATH        Write to PATH instead of stdout
        --config PATH        Read settings from PATH (default: ./mtrgen.ron)
        --shape-based        Export with the legacy shape-based collapsing
    -v, --verbose            Log debug output to stderr
    -h, --help               Print this message
    -V, --version            Print version info and exit

Set {log_env} to a tracing filter (e.g. {log_example}) for finer logging.
",
        title = Style::new().bold().paint("mtrgen-template"),
        usage_label = Blue.bold().paint("Usage"),
        commands_label = Blue.bold().paint("Commands"),
        new = Green.paint("new"),
        import = Green.paint("import"),
        edit = Green.paint("edit"),
        export = Green.paint("export"),
        show = Green.paint("show"),
        dash = Green.paint("-"),
        options_label = Blue.bold().paint("Options"),
        log_env = Green.paint(logging::LOG_ENV),
        log_example = Green.paint("mtrgen_template_editor=trace"),
    )
}
