//! Notes file output.
//!
//! Writes a [`NotesDocument`] back into the notes file format, one block per
//! note followed by a blank line:
//!
//! ```text
//! -- 1
//! Welcome everyone.
//!
//! -- 2
//! Agenda.
//!
//! ```

use crate::parser::DELIMITER;
use crate::types::NotesDocument;
use bstr::BString;

/// Formatter producing notes file content.
#[derive(Debug, Clone, Default)]
pub struct NotesFormatter;

impl NotesFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format every non-empty note as a delimited block.
    pub fn format(&self, document: &NotesDocument) -> BString {
        let mut out = Vec::new();

        for (identifier, text) in document.iter().filter(|(_, text)| !text.is_empty()) {
            out.extend_from_slice(DELIMITER.as_bytes());
            out.extend_from_slice(identifier);
            out.push(b'\n');
            out.extend_from_slice(text);
            out.extend_from_slice(b"\n\n");
        }

        BString::from(out)
    }
}
