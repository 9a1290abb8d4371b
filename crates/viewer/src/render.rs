//! Rendering of a single viewer frame.

use notes_core::error::decode;
use notes_core::{NotesDocument, Result, SlideEvent};
use std::fmt;
use std::io::Write;

/// Shown when no note exists for the requested slide.
pub const PLACEHOLDER: &str = "--";

/// Everything printed for one slide event, after the screen is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The requested line exactly as read, terminator included.
    pub header: String,
    /// The note text, or [`PLACEHOLDER`].
    pub body: String,
}

impl Frame {
    /// Whether the frame shows the placeholder instead of a note.
    pub fn is_placeholder(&self) -> bool {
        self.body == PLACEHOLDER
    }

    /// Write the frame to an output stream.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "\t{}", self.header)?;
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "{}", self.body)
    }
}

/// Build the frame for a slide event.
///
/// Fails only if the input line or the note is not valid UTF-8.
pub fn render(document: &NotesDocument, event: &SlideEvent) -> Result<Frame> {
    let header = decode(event.raw(), || "slide event".to_string())?;
    let body = document.text(event.key())?.unwrap_or(PLACEHOLDER);

    Ok(Frame {
        header: header.to_string(),
        body: body.to_string(),
    })
}
