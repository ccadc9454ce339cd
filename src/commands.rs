// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use ansi_term::Colour::{Blue, Cyan, Green, Yellow};
use ansi_term::Style;
use anyhow::{Context, Result};
use mtrgen_template_common::{ExportStyle, TemplateArgs, TemplateCommand, TemplateConfig};
use mtrgen_template_editor::{Edit, TemplateSession};
use mtrgen_template_schema::{
    Class, Constant, DeclarationContainer, ExportMode, Interface, Method, Param, Prop, Template,
    Trait, convert,
};
use std::fs;
use std::io::{self, Read};
use tracing::info;

pub fn run(args: &TemplateArgs, config: &TemplateConfig) -> Result<()> {
    match args.command {
        TemplateCommand::New => new_template(args, config),
        TemplateCommand::Import => import(args, config),
        TemplateCommand::Edit => edit(args, config),
        TemplateCommand::Export => export(args, config),
        TemplateCommand::Show => show(args),
    }
}

fn new_template(args: &TemplateArgs, config: &TemplateConfig) -> Result<()> {
    let mut session = TemplateSession::new(config.defaults.clone());
    if let Some(name) = args.input() {
        session.apply(&Edit::SetName {
            name: name.to_string(),
        })?;
    }
    write_output(args.output.as_deref(), &session.to_editing_json()?)
}

fn import(args: &TemplateArgs, config: &TemplateConfig) -> Result<()> {
    let session = load_session(required_input(args)?, config)?;
    write_output(args.output.as_deref(), &session.to_editing_json()?)
}

fn edit(args: &TemplateArgs, config: &TemplateConfig) -> Result<()> {
    let mut session = load_session(required_input(args)?, config)?;

    let script_path = args
        .inputs
        .get(1)
        .context("no edit script given")?;
    let script = read_input(script_path)?;
    let edits: Vec<Edit> = serde_json::from_str(&script)
        .with_context(|| format!("invalid edit script {script_path}"))?;

    session
        .apply_all(&edits)
        .with_context(|| format!("failed to apply {script_path}"))?;
    info!(edits = edits.len(), revision = session.revision(), "applied edit script");

    write_output(args.output.as_deref(), &session.to_editing_json()?)
}

fn export(args: &TemplateArgs, config: &TemplateConfig) -> Result<()> {
    let path = required_input(args)?;
    let template = convert::deserialize(&read_input(path)?)
        .with_context(|| format!("failed to load template from {path}"))?;
    let json = convert::serialize_with(&template, export_mode(args, config))?;
    write_output(args.output.as_deref(), &json)
}

fn show(args: &TemplateArgs) -> Result<()> {
    let path = required_input(args)?;
    let template = convert::deserialize(&read_input(path)?)
        .with_context(|| format!("failed to load template from {path}"))?;
    println!("{}", outline(&template));
    Ok(())
}

fn export_mode(args: &TemplateArgs, config: &TemplateConfig) -> ExportMode {
    if args.shape_based || config.export.style == ExportStyle::ShapeBased {
        ExportMode::ShapeBased
    } else {
        ExportMode::Typed
    }
}

fn load_session(path: &str, config: &TemplateConfig) -> Result<TemplateSession> {
    let text = read_input(path)?;
    TemplateSession::load(&text, config.defaults.clone())
        .with_context(|| format!("failed to load template from {path}"))
}

fn required_input(args: &TemplateArgs) -> Result<&str> {
    args.input().context("no input file given")
}

/// Reads a file, or stdin for `-`
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}

fn write_output(output: Option<&str>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {path}"))?;
            eprintln!("{} {}", Green.paint("Wrote"), path);
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Human-readable tree of the template, one line per node
pub fn outline(template: &Template) -> String {
    let mut lines = vec![format!(
        "{} {} {}",
        Style::new().bold().paint(template.name.as_str()),
        Cyan.paint(template.filename.as_str()),
        Cyan.paint(template.path.as_str())
    )];

    let file = &template.file;
    if file.strict == Some(true) {
        lines.push(format!("  {}", Yellow.paint("strict_types")));
    }
    for statement in file.uses.iter().flatten() {
        lines.push(format!("  {} {}", Blue.paint("use"), statement.value));
    }
    container_lines(file, 1, &mut lines);

    if let Some(namespace) = &file.namespace {
        lines.push(format!("  {} {}", Blue.paint("namespace"), namespace.name));
        for statement in namespace.uses.iter().flatten() {
            lines.push(format!("    {} {}", Blue.paint("use"), statement.value));
        }
        container_lines(namespace, 2, &mut lines);
    }

    lines.join("\n")
}

fn container_lines(container: &dyn DeclarationContainer, depth: usize, lines: &mut Vec<String>) {
    let (class, interface, trait_def) = container.slots();
    if let Some(class) = class {
        class_lines(class, depth, lines);
    }
    if let Some(interface) = interface {
        interface_lines(interface, depth, lines);
    }
    if let Some(trait_def) = trait_def {
        trait_lines(trait_def, depth, lines);
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn class_lines(class: &Class, depth: usize, lines: &mut Vec<String>) {
    let mut header = String::new();
    if let Some(modifier) = class.modifier {
        header.push_str(&format!("{} ", Blue.paint(modifier.as_str())));
    }
    header.push_str(&format!("{} {}", Blue.paint("class"), Style::new().bold().paint(class.name.as_str())));
    if let Some(parent) = &class.extends {
        header.push_str(&format!(" {} {}", Blue.paint("extends"), parent));
    }
    let implements: Vec<&str> = class.implements.iter().flatten().map(|i| i.as_str()).collect();
    if !implements.is_empty() {
        header.push_str(&format!(" {} {}", Blue.paint("implements"), implements.join(", ")));
    }
    lines.push(format!("{}{header}", indent(depth)));

    let traits: Vec<&str> = class.traits.iter().flatten().map(|t| t.as_str()).collect();
    if !traits.is_empty() {
        lines.push(format!("{}{} {}", indent(depth + 1), Blue.paint("use"), traits.join(", ")));
    }
    member_lines(&class.constants, &class.props, &class.methods, depth + 1, lines);
}

fn interface_lines(interface: &Interface, depth: usize, lines: &mut Vec<String>) {
    let mut header = format!(
        "{} {}",
        Blue.paint("interface"),
        Style::new().bold().paint(interface.name.as_str())
    );
    if let Some(parent) = &interface.extends {
        header.push_str(&format!(" {} {}", Blue.paint("extends"), parent));
    }
    lines.push(format!("{}{header}", indent(depth)));
    member_lines(&interface.constants, &None, &interface.methods, depth + 1, lines);
}

fn trait_lines(trait_def: &Trait, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!(
        "{}{} {}",
        indent(depth),
        Blue.paint("trait"),
        Style::new().bold().paint(trait_def.name.as_str())
    ));
    member_lines(&None, &trait_def.props, &trait_def.methods, depth + 1, lines);
}

fn member_lines(
    constants: &Option<Vec<Constant>>,
    props: &Option<Vec<Prop>>,
    methods: &Option<Vec<Method>>,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let pad = indent(depth);
    for constant in constants.iter().flatten() {
        lines.push(format!(
            "{pad}{} {} {} = {}",
            constant.visibility_or_default(),
            Blue.paint("const"),
            constant.name,
            Yellow.paint(constant.value.to_string())
        ));
    }
    for prop in props.iter().flatten() {
        let mut line = format!("{pad}{}", prop.visibility_or_default());
        if prop.is_static == Some(true) {
            line.push_str(" static");
        }
        line.push_str(&format!(" {}${}", type_prefix(&prop.type_name, prop.nullable), prop.name));
        if let Some(value) = &prop.value {
            line.push_str(&format!(" = {}", Yellow.paint(value.to_string())));
        }
        lines.push(line);
    }
    for method in methods.iter().flatten() {
        let mut line = format!("{pad}{}", method.visibility_or_default());
        if let Some(modifier) = method.modifier {
            line.push_str(&format!(" {}", modifier.as_str()));
        }
        if method.is_static == Some(true) {
            line.push_str(" static");
        }
        let params: Vec<String> = method.params.iter().flatten().map(param_text).collect();
        line.push_str(&format!(
            " {} {}{}({})",
            Blue.paint("function"),
            if method.by_ref == Some(true) { "&" } else { "" },
            method.name,
            params.join(", ")
        ));
        if let Some(return_type) = &method.return_type {
            let nullable = if method.nullable == Some(true) { "?" } else { "" };
            line.push_str(&format!(": {}", Green.paint(format!("{nullable}{return_type}"))));
        }
        lines.push(line);
    }
}

fn param_text(param: &Param) -> String {
    let mut text = type_prefix(&param.type_name, param.nullable);
    if param.by_ref == Some(true) {
        text.push('&');
    }
    text.push_str(&format!("${}", param.name));
    if let Some(value) = &param.value {
        text.push_str(&format!(" = {value}"));
    }
    text
}

fn type_prefix(type_name: &Option<String>, nullable: Option<bool>) -> String {
    match type_name {
        Some(type_name) => {
            let nullable = if nullable == Some(true) { "?" } else { "" };
            format!("{} ", Green.paint(format!("{nullable}{type_name}")))
        }
        None => String::new(),
    }
}
