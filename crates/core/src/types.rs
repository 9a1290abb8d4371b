//! Domain types for parsed notes and viewer input.

use crate::error::{decode, Result};
use bstr::{BStr, BString, ByteSlice};
use std::collections::BTreeMap;

/// Parsed notes: slide identifier to note text.
///
/// Identifiers and texts are kept as raw bytes; they are only decoded as
/// UTF-8 when they are emitted (see [`NotesDocument::text`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesDocument {
    notes: BTreeMap<BString, BString>,
}

impl NotesDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the note for a slide, returning the text it replaced.
    pub fn insert(
        &mut self,
        identifier: impl Into<BString>,
        text: impl Into<BString>,
    ) -> Option<BString> {
        self.notes.insert(identifier.into(), text.into())
    }

    /// Look up the raw note text for an identifier (exact byte match).
    pub fn get(&self, identifier: impl AsRef<[u8]>) -> Option<&BStr> {
        self.notes
            .get(identifier.as_ref().as_bstr())
            .map(|text| text.as_bstr())
    }

    /// Look up a note and decode it as UTF-8.
    ///
    /// Returns `Ok(None)` for unknown identifiers.
    pub fn text(&self, identifier: impl AsRef<[u8]>) -> Result<Option<&str>> {
        let identifier = identifier.as_ref();
        match self.get(identifier) {
            Some(raw) => decode(raw, || format!("note for slide {:?}", identifier.as_bstr()))
                .map(Some),
            None => Ok(None),
        }
    }

    /// Whether a note exists for the identifier.
    pub fn contains(&self, identifier: impl AsRef<[u8]>) -> bool {
        self.get(identifier).is_some()
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Iterate over `(identifier, text)` pairs in identifier byte order.
    pub fn iter(&self) -> impl Iterator<Item = (&BStr, &BStr)> {
        self.notes.iter().map(|(k, v)| (k.as_bstr(), v.as_bstr()))
    }
}

/// One line read by the viewer, naming the slide to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideEvent {
    raw: BString,
}

impl SlideEvent {
    /// Wrap a raw input line (terminator included, if any).
    pub fn new(raw: impl Into<BString>) -> Self {
        Self { raw: raw.into() }
    }

    /// The line exactly as read.
    pub fn raw(&self) -> &BStr {
        self.raw.as_bstr()
    }

    /// The lookup key: the line without surrounding whitespace.
    pub fn key(&self) -> &[u8] {
        trim_whitespace(&self.raw)
    }
}

/// Strip leading and trailing ASCII whitespace, vertical tab included.
pub(crate) fn trim_whitespace(bytes: &[u8]) -> &[u8] {
    bytes.trim_with(|c| c.is_ascii_whitespace() || c == '\x0b')
}
