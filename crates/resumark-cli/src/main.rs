//! resumark CLI - render and inspect resume documents
//!
//! Usage:
//!   rmcli [OPTIONS] <COMMAND> [FILE]
//!
//! Commands:
//!   render    Render the document to an HTML fragment
//!   outline   List headings and section slugs
//!   stats     Show document statistics
//!   check     Report links that will render as plain text
//!
//! FILE defaults to stdin; `-` also means stdin.

mod error;
mod source;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use resumark_core::block::{classify, slugify};
use resumark_core::inline::links;
use resumark_core::lexer::Lexer;
use resumark_core::{render_with_stats, Block, HeadingLevel, ResumeView};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use error::CliError;
use source::Source;

/// Render a resume-flavoured markdown document to sanitized HTML.
#[derive(Parser)]
#[command(name = "rmcli", version, about)]
struct Cli {
    /// Output in JSON format
    #[arg(short = 'j', long, global = true)]
    json: bool,

    /// Enable debug logging (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the document to an HTML fragment
    Render(RenderArgs),
    /// List headings in document order with their section slugs
    Outline(InputArgs),
    /// Show document statistics
    Stats(InputArgs),
    /// Report links that will render as plain text
    Check(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Markdown file to read (stdin when omitted or `-`)
    file: Option<PathBuf>,
}

impl InputArgs {
    fn source(&self) -> Source {
        Source::from_arg(self.file.as_deref())
    }
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Write the HTML to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the fragment in its `.resume` container element
    #[arg(long)]
    wrap: bool,

    /// Emit the error placeholder instead of failing when the input cannot be read
    #[arg(long)]
    fallback: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render(args) => cmd_render(&args, cli.json),
        Command::Outline(args) => cmd_outline(&args.source().read()?, cli.json),
        Command::Stats(args) => cmd_stats(&args.source().read()?, cli.json),
        Command::Check(args) => cmd_check(&args.source().read()?, cli.json),
    }
}

// =============================================================================
// Render Command
// =============================================================================

#[derive(Serialize)]
struct JsonRender<'a> {
    state: &'a str,
    error: bool,
    html: &'a str,
}

fn cmd_render(args: &RenderArgs, json: bool) -> Result<(), CliError> {
    let view = match args.input.source().read() {
        Ok(markdown) => ResumeView::from_markdown(&markdown),
        Err(e) if args.fallback => ResumeView::from_source(Err::<String, _>(e)),
        Err(e) => return Err(e),
    };
    tracing::debug!(state = view.state(), "rendered document");

    let html = if args.wrap {
        view.wrap()
    } else {
        view.markup().to_string()
    };

    let text = if json {
        serde_json::to_string_pretty(&JsonRender {
            state: view.state(),
            error: view.is_error(),
            html: &html,
        })?
    } else {
        html
    };

    match &args.output {
        Some(path) => fs::write(path, &text).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        }),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

// =============================================================================
// Outline Command
// =============================================================================

#[derive(Serialize)]
struct OutlineEntry<'a> {
    line: usize,
    level: u8,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
}

fn outline(input: &str) -> Vec<OutlineEntry<'_>> {
    Lexer::new(input)
        .filter_map(|line| match classify(line.text) {
            Block::Heading { level, text } => Some(OutlineEntry {
                line: line.number,
                level: level.level(),
                text,
                slug: (level == HeadingLevel::Section).then(|| slugify(text)),
            }),
            _ => None,
        })
        .collect()
}

fn cmd_outline(input: &str, json: bool) -> Result<(), CliError> {
    let entries = outline(input);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        let marker = "#".repeat(usize::from(entry.level));
        let suffix = match entry.slug.as_deref() {
            Some("") => "  (no slug)".to_string(),
            Some(slug) => format!("  (.resume__section--{})", slug),
            None => String::new(),
        };
        println!("{:>5}  {} {}{}", entry.line, marker, entry.text, suffix);
    }

    Ok(())
}

// =============================================================================
// Stats Command
// =============================================================================

#[derive(Serialize)]
struct DocumentStats {
    lines: usize,
    name_headings: usize,
    section_headings: usize,
    item_headings: usize,
    sections: usize,
    lists: usize,
    list_items: usize,
    paragraphs: usize,
    chars: usize,
    words: usize,
    html_bytes: usize,
}

impl DocumentStats {
    fn from_input(input: &str) -> Self {
        let rendered = render_with_stats(input);
        let stats = rendered.stats;
        Self {
            lines: stats.lines,
            name_headings: stats.headings[0],
            section_headings: stats.headings[1],
            item_headings: stats.headings[2],
            sections: stats.sections,
            lists: stats.lists,
            list_items: stats.list_items,
            paragraphs: stats.paragraphs,
            chars: input.chars().count(),
            words: input.split_whitespace().count(),
            html_bytes: rendered.html.len(),
        }
    }
}

fn cmd_stats(input: &str, json: bool) -> Result<(), CliError> {
    let stats = DocumentStats::from_input(input);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Document Statistics");
    println!("-------------------");
    println!("Headings:");
    println!("  Name (#):       {}", stats.name_headings);
    println!("  Section (##):   {}", stats.section_headings);
    println!("  Item (###):     {}", stats.item_headings);
    println!();
    println!("Content:");
    println!("  Sections:       {}", stats.sections);
    println!("  Lists:          {}", stats.lists);
    println!("  List items:     {}", stats.list_items);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);
    println!("  HTML bytes:     {}", stats.html_bytes);

    Ok(())
}

// =============================================================================
// Check Command
// =============================================================================

#[derive(Serialize)]
struct RejectedLink<'a> {
    line: usize,
    label: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    valid: bool,
    links: usize,
    rejected: &'a [RejectedLink<'a>],
}

fn cmd_check(input: &str, json: bool) -> Result<(), CliError> {
    let mut total = 0;
    let mut rejected = Vec::new();

    for line in Lexer::new(input) {
        for link in links(line.text) {
            total += 1;
            if !link.is_allowed() {
                rejected.push(RejectedLink {
                    line: line.number,
                    label: link.label,
                    url: link.url,
                });
            }
        }
    }

    if json {
        let report = JsonCheck {
            valid: rejected.is_empty(),
            links: total,
            rejected: &rejected,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if rejected.is_empty() {
        println!("Valid: {} link(s), none rejected", total);
    } else {
        for link in &rejected {
            eprintln!(
                "warning: line {}: [{}]({}) will render as plain text",
                link.line, link.label, link.url
            );
        }
    }

    if rejected.is_empty() {
        Ok(())
    } else {
        Err(CliError::RejectedLinks(rejected.len()))
    }
}
