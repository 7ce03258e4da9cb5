//! Koala style inspector
//!
//! Loads a JSON fixture document and prints the computed display, size and
//! offsets of every element, the way a script in the emulated browser
//! would observe them.

mod fixture;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use koala_common::warning::clear_warnings;
use koala_dom::{DomTree, NodeId};
use koala_style::{BrowserProfile, EdgeSizes, StyleConfig, StyleContext, Viewport};
use owo_colors::OwoColorize;
use serde::Serialize;

use fixture::Fixture;

/// Koala style inspector: computed styles and approximate geometry
#[derive(Parser, Debug)]
#[command(name = "koala-style")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the element tree with geometry
    koala-style page.json

    # Emulate legacy IE in a small window
    koala-style --profile legacy-ie --width 800 --height 600 page.json

    # Machine-readable output
    koala-style --json page.json
"#)]
struct Cli {
    /// Path to a JSON fixture document
    #[arg(value_name = "FIXTURE")]
    path: PathBuf,

    /// Print JSON instead of a tree
    #[arg(long)]
    json: bool,

    /// Browser profile: chrome, firefox or legacy-ie
    #[arg(long, value_name = "NAME")]
    profile: Option<String>,

    /// Viewport width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Viewport height in pixels
    #[arg(long)]
    height: Option<i32>,
}

/// What the inspector reports for one element.
#[derive(Debug, Serialize)]
struct ElementReport {
    node: usize,
    tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    display: String,
    position: String,
    width: i32,
    height: i32,
    left: i32,
    top: i32,
    margin: EdgeSizes,
    border: EdgeSizes,
    padding: EdgeSizes,
    color: String,
    children: Vec<ElementReport>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    clear_warnings();

    let text = fs::read_to_string(&cli.path)
        .with_context(|| format!("cannot read {}", cli.path.display()))?;
    let fixture = Fixture::from_json(&text)?;
    let config = config_for(&cli, &fixture)?;
    let (tree, rules) = fixture.build()?;

    let ctx = StyleContext::new(&tree, &rules, config);
    let reports = element_children(&tree, NodeId::ROOT)
        .into_iter()
        .map(|node| report(&ctx, node))
        .collect::<Result<Vec<_>>>()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        let viewport = ctx.config().viewport;
        println!(
            "=== Computed geometry ({}, viewport: {}x{}) ===\n",
            ctx.config().profile.name,
            viewport.width,
            viewport.height
        );
        for report in &reports {
            print_report(report, 0);
        }
    }
    Ok(())
}

/// Command-line options override the fixture's own profile and viewport.
fn config_for(cli: &Cli, fixture: &Fixture) -> Result<StyleConfig> {
    let profile = match cli.profile.as_deref().or(fixture.profile.as_deref()) {
        Some(name) => BrowserProfile::from_name(name)?,
        None => BrowserProfile::default(),
    };
    let base = fixture.viewport.unwrap_or_default();
    let viewport = Viewport::new(
        cli.width.unwrap_or(base.width),
        cli.height.unwrap_or(base.height),
    );
    Ok(StyleConfig::new(profile, viewport))
}

fn element_children(tree: &DomTree, node: NodeId) -> Vec<NodeId> {
    tree.children(node)
        .iter()
        .copied()
        .filter(|&child| tree.as_element(child).is_some())
        .collect()
}

fn report(ctx: &StyleContext<'_>, node: NodeId) -> Result<ElementReport> {
    let style = ctx.computed_style(node)?;
    let tree = ctx.tree();
    let element = tree
        .as_element(node)
        .with_context(|| format!("{node:?} is not an element"))?;
    let children = element_children(tree, node)
        .into_iter()
        .map(|child| report(ctx, child))
        .collect::<Result<Vec<_>>>()?;

    Ok(ElementReport {
        node: node.0,
        tag: element.tag_name.clone(),
        id: element.id().map(str::to_string),
        display: style.display(),
        position: style.position_with_inheritance(),
        width: style.calculated_width(false, false),
        height: style.calculated_height(false, false),
        left: style.left(false, false, false),
        top: style.top(false, false, false),
        margin: style.margin(),
        border: style.border(),
        padding: style.padding(),
        color: style.color(),
        children,
    })
}

fn print_report(report: &ElementReport, depth: usize) {
    let indent = "  ".repeat(depth);
    let id = report
        .id
        .as_ref()
        .map(|id| format!("#{id}"))
        .unwrap_or_default();
    let display = if report.display.is_empty() {
        "(none reported)".to_string()
    } else {
        report.display.clone()
    };
    println!(
        "{indent}{}{} {}",
        format!("<{}>", report.tag).cyan(),
        id.yellow(),
        display.dimmed()
    );
    println!(
        "{indent}  size: {}x{}  offset: left={} top={}  position: {}",
        report.width, report.height, report.left, report.top, report.position
    );
    if !report.display.is_empty() && report.display != "none" {
        println!(
            "{indent}  margin: {}  border: {}  padding: {}",
            edges(&report.margin),
            edges(&report.border),
            edges(&report.padding)
        );
    }
    for child in &report.children {
        print_report(child, depth + 1);
    }
}

fn edges(sizes: &EdgeSizes) -> String {
    format!("{} {} {} {}", sizes.top, sizes.right, sizes.bottom, sizes.left)
}
