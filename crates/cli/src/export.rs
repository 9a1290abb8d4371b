//! Export a speaker notes file as XML on standard output.

use anyhow::{Context, Result};
use clap::Parser;
use notes_cli::{init_logging, parse_args};
use notes_core::NotesParser;
use notes_xml::XmlExporter;
use std::path::PathBuf;

/// Convert a speaker notes file into an XML document.
#[derive(Parser, Debug)]
#[command(name = "notes-export")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the notes file
    notes: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args: Args = parse_args();
    init_logging(args.verbose);

    // Comment lines are only dropped for export
    let document = NotesParser::new()
        .with_comment_filter(true)
        .load(&args.notes)
        .with_context(|| format!("Failed to load notes from {}", args.notes.display()))?;

    log::debug!("Loaded {} notes from {}", document.len(), args.notes.display());

    let stdout = std::io::stdout();
    XmlExporter::new()
        .write(&document, stdout.lock())
        .context("Failed to export notes")?;

    Ok(())
}
