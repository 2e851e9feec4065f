//! astdelta CLI - structural diff for source files
//!
//! Compares two versions of a source file at the AST level and reports,
//! per top-level declaration, whether it was deleted, added, or
//! modified. Formatting-only edits (indentation, blank lines, comments)
//! never show up as changes.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod output;
mod report;

use astdelta_core::{compare_sources, parser::detect_language};
use output::{OutputConfig, OutputFormat, Outputter};
use report::DiffReport;

/// Structural diff for source files.
///
/// astdelta parses both versions, aligns their top-level declarations by
/// canonical signature, and reports each declaration as deleted, added,
/// or modified, with the original source locations on both sides.
#[derive(Parser)]
#[command(name = "astdelta")]
#[command(author, version)]
#[command(about = "Structural (AST-level) diff for source files")]
#[command(after_help = "Examples:
  astdelta old.py new.py            Human-readable change report
  astdelta old.py new.py --format json
  astdelta old.txt new.txt --language python")]
pub struct Cli {
    /// Original version of the file
    original: PathBuf,

    /// Modified version of the file
    modified: PathBuf,

    /// Output format (defaults to the human-readable table)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Language of both files (detected from extension when omitted)
    #[arg(short, long)]
    language: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Resolve the language from the flag or from the file extensions.
fn resolve_language(cli: &Cli) -> anyhow::Result<String> {
    if let Some(language) = &cli.language {
        return Ok(language.clone());
    }

    cli.original
        .to_str()
        .and_then(detect_language)
        .or_else(|| cli.modified.to_str().and_then(detect_language))
        .map(|lang| lang.to_string())
        .context("could not detect language from file extensions; pass --language")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let language = resolve_language(&cli)?;

    let original = fs::read_to_string(&cli.original)
        .with_context(|| format!("failed to read {}", cli.original.display()))?;
    let modified = fs::read_to_string(&cli.modified)
        .with_context(|| format!("failed to read {}", cli.modified.display()))?;

    tracing::debug!(%language, "comparing files");
    let diff = compare_sources(&original, &modified, &language)?;
    tracing::debug!(changes = diff.change_count(), "comparison finished");

    let report = DiffReport::new(
        cli.original.display().to_string(),
        cli.modified.display().to_string(),
        language,
        diff,
    );

    let color_override = if cli.no_color { Some(false) } else { None };
    let config = OutputConfig::auto_detect(cli.format.unwrap_or_default(), color_override);
    print!("{}", report.render(&config));

    Ok(())
}
