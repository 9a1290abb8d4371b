//! Show speaker notes for slide identifiers read from standard input.

use anyhow::{Context, Result};
use clap::Parser;
use notes_cli::{init_logging, parse_args};
use notes_core::NotesParser;
use notes_viewer::{Terminal, Viewer};
use std::path::PathBuf;

/// Display the note for each slide identifier read from standard input.
#[derive(Parser, Debug)]
#[command(name = "notes-view")]
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

    let document = NotesParser::new()
        .load(&args.notes)
        .with_context(|| format!("Failed to load notes from {}", args.notes.display()))?;
    let terminal = Terminal::from_env().context("Failed to set up terminal")?;

    log::debug!("Loaded {} notes from {}", document.len(), args.notes.display());

    let viewer = Viewer::new(document, terminal);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    viewer
        .run(stdin.lock(), &mut stdout.lock())
        .context("Viewer stopped")?;

    Ok(())
}
