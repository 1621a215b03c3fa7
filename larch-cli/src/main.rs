//! Larch CLI
//!
//! Runs markup through the rendering pipeline and prints each stage.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use larch_browser::{RenderedDocument, default_rules, render};
use larch_css::{Rect, Rule};
use owo_colors::OwoColorize;

/// Larch: print the document, styled, and layout trees for a page
#[derive(Parser, Debug)]
#[command(name = "larch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Lay out a file with the default rules
    larch ./page.html

    # Inline markup with rules from a JSON file
    larch --html '<div><p>hi</p></div>' --rules rules.json

    # Narrow viewport, layout tree as JSON
    larch --width 320 --json ./page.html

Rules files hold a JSON array of records such as
    {"selectorType": "tag", "selector": "p", "name": "display", "value": "block"}
"#)]
struct Cli {
    /// Path to a markup file
    #[arg(value_name = "FILE", required_unless_present = "html")]
    path: Option<PathBuf>,

    /// Parse markup passed directly instead of a file
    #[arg(long, value_name = "MARKUP", conflicts_with = "path")]
    html: Option<String>,

    /// JSON file with the style rules, in cascade order
    #[arg(short, long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Viewport width in px
    #[arg(long, default_value = "800")]
    width: u32,

    /// Viewport height in px
    #[arg(long, default_value = "600")]
    height: u32,

    /// Also print the styled tree
    #[arg(short, long)]
    styles: bool,

    /// Print the layout tree as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored headings
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let markup = load_markup(cli)?;
    let rules = match &cli.rules {
        Some(path) => load_rules(path)?,
        None => default_rules(),
    };
    log::debug!("{} rules", rules.len());

    #[allow(clippy::cast_precision_loss)]
    let viewport = Rect {
        x: 0.0,
        y: 0.0,
        width: cli.width as f32,
        height: cli.height as f32,
    };

    let rendered = render(&markup, &rules, viewport)?;
    print_document(cli, &rendered)
}

/// Markup from `--html` or the input file.
fn load_markup(cli: &Cli) -> Result<String> {
    if let Some(html) = &cli.html {
        return Ok(html.clone());
    }
    let Some(path) = &cli.path else {
        anyhow::bail!("a file path or --html is required");
    };
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_rules(path: &Path) -> Result<Vec<Rule>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid rules file {}", path.display()))
}

fn heading(cli: &Cli, title: &str) {
    let line = format!("=== {title} ===");
    if cli.no_color {
        println!("{line}");
    } else {
        println!("{}", line.bold().cyan());
    }
}

fn print_document(cli: &Cli, rendered: &RenderedDocument) -> Result<()> {
    heading(cli, "Document Tree");
    println!("{}", rendered.document_dump);

    if cli.styles {
        println!();
        heading(cli, "Styled Tree");
        println!("{}", rendered.styled_dump);
    }

    println!();
    heading(cli, "Layout Tree");
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rendered.layout)?);
    } else {
        println!("{}", rendered.layout);
    }
    Ok(())
}
