//! Notes file parser.
//!
//! A notes file is plain text split into blocks by the delimiter `"-- "`.
//! Everything before the first delimiter is ignored. The rest of the line
//! following a delimiter is the slide identifier, and the lines after it up
//! to the next delimiter form the note:
//!
//! ```text
//! anything here is ignored
//! -- 1
//! Welcome everyone.
//! -- 2
//! # a comment, dropped when comment filtering is on
//! Agenda.
//! ```

use crate::error::{Error, Result};
use crate::types::{trim_whitespace, NotesDocument};
use bstr::{BString, ByteSlice};
use std::path::Path;

/// Block delimiter.
pub const DELIMITER: &str = "-- ";

/// Lines starting with this byte are comments.
const COMMENT_MARKER: u8 = b'#';

/// Parser for the notes file format.
#[derive(Debug, Clone, Default)]
pub struct NotesParser {
    /// Drop `#` comment lines from note bodies.
    filter_comments: bool,
}

impl NotesParser {
    /// Create a parser that keeps comment lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable dropping of `#` comment lines.
    pub fn with_comment_filter(mut self, enabled: bool) -> Self {
        self.filter_comments = enabled;
        self
    }

    /// Read a notes file and parse it.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<NotesDocument> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(self.parse(&content))
    }

    /// Parse the full content of a notes file.
    ///
    /// Never fails: content without a delimiter yields an empty document.
    /// Later blocks replace earlier blocks with the same identifier.
    pub fn parse(&self, content: &[u8]) -> NotesDocument {
        let mut document = NotesDocument::new();

        for block in content.split_str(DELIMITER).skip(1) {
            let (identifier, text) = self.parse_block(block);

            if document.insert(identifier, text).is_some() {
                log::debug!(
                    "Duplicate slide identifier {:?}, keeping the later note",
                    identifier.as_bstr()
                );
            }
        }

        log::debug!("Parsed {} notes", document.len());
        document
    }

    /// Split one block into its identifier line and trimmed note text.
    fn parse_block<'a>(&self, block: &'a [u8]) -> (&'a [u8], BString) {
        let mut lines = block.split_str("\n");
        let identifier = lines.next().unwrap_or_default();

        let body: Vec<&[u8]> = lines
            .filter(|line| !(self.filter_comments && is_comment(line)))
            .collect();
        let text = bstr::join("\n", body);

        (identifier, BString::from(trim_whitespace(&text)))
    }
}

/// A non-empty line whose first byte is the comment marker.
fn is_comment(line: &[u8]) -> bool {
    line.first() == Some(&COMMENT_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bstr::BStr;

    const SAMPLE: &str = "pre\n-- 1\nHello\n-- 2\n# comment\nWorld\n";

    fn text<'a>(doc: &'a NotesDocument, id: &str) -> Option<&'a BStr> {
        doc.get(id)
    }

    #[test]
    fn test_parse_sample_without_filter() {
        let doc = NotesParser::new().parse(SAMPLE.as_bytes());

        assert_eq!(doc.len(), 2);
        assert_eq!(text(&doc, "1"), Some(b"Hello".as_bstr()));
        assert_eq!(text(&doc, "2"), Some(b"# comment\nWorld".as_bstr()));
    }

    #[test]
    fn test_parse_sample_with_filter() {
        let doc = NotesParser::new()
            .with_comment_filter(true)
            .parse(SAMPLE.as_bytes());

        assert_eq!(text(&doc, "1"), Some(b"Hello".as_bstr()));
        assert_eq!(text(&doc, "2"), Some(b"World".as_bstr()));
    }

    #[test]
    fn test_no_delimiter_is_empty() {
        let doc = NotesParser::new().parse(b"just some text\nwithout blocks\n");
        assert!(doc.is_empty());

        let doc = NotesParser::new().parse(b"");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_preamble_is_ignored() {
        let doc = NotesParser::new().parse(b"Hello\nworld\n-- 5\nnote\n");
        assert_eq!(doc.len(), 1);
        assert_eq!(text(&doc, "5"), Some(b"note".as_bstr()));
    }

    #[test]
    fn test_duplicate_identifier_keeps_later() {
        let doc = NotesParser::new().parse(b"-- 1\nfirst\n-- 2\nother\n-- 1\nsecond\n");

        assert_eq!(doc.len(), 2);
        assert_eq!(text(&doc, "1"), Some(b"second".as_bstr()));
    }

    #[test]
    fn test_internal_line_breaks_preserved_and_trimmed() {
        let doc = NotesParser::new().parse(b"-- 3\n\n  first line\n\nsecond line  \n\n\n");
        assert_eq!(
            text(&doc, "3"),
            Some(b"first line\n\nsecond line".as_bstr())
        );
    }

    #[test]
    fn test_blank_lines_kept_when_filtering() {
        let doc = NotesParser::new()
            .with_comment_filter(true)
            .parse(b"-- 1\nA\n\n#hidden\nB\n");
        assert_eq!(text(&doc, "1"), Some(b"A\n\nB".as_bstr()));
    }

    #[test]
    fn test_indented_hash_is_not_a_comment() {
        let doc = NotesParser::new()
            .with_comment_filter(true)
            .parse(b"-- 1\n  # not a comment\n");
        assert_eq!(text(&doc, "1"), Some(b"# not a comment".as_bstr()));
    }

    #[test]
    fn test_identifier_taken_verbatim() {
        let doc = NotesParser::new().parse(b"-- 1 \nspaced\n-- 2\r\ncrlf\r\n");

        assert!(doc.contains("1 "));
        assert!(!doc.contains("1"));
        assert!(doc.contains("2\r"));
        assert_eq!(text(&doc, "2\r"), Some(b"crlf".as_bstr()));
    }

    #[test]
    fn test_empty_identifier() {
        let doc = NotesParser::new().parse(b"-- \nanonymous\n");
        assert_eq!(text(&doc, ""), Some(b"anonymous".as_bstr()));
    }

    #[test]
    fn test_identifier_without_body() {
        let doc = NotesParser::new().parse(b"-- 7");
        assert_eq!(text(&doc, "7"), Some(b"".as_bstr()));
    }

    #[test]
    fn test_delimiter_inside_line_splits() {
        let doc = NotesParser::new().parse(b"-- 1\nsee -- 2\nrest\n");

        assert_eq!(text(&doc, "1"), Some(b"see".as_bstr()));
        assert_eq!(text(&doc, "2"), Some(b"rest".as_bstr()));
    }

    #[test]
    fn test_invalid_utf8_parses() {
        let doc = NotesParser::new().parse(b"-- 1\ncaf\xe9\n");
        assert_eq!(doc.len(), 1);
        assert!(doc.text("1").is_err());
    }

    #[test]
    fn test_vertical_tab_is_trimmed() {
        let doc = NotesParser::new().parse(b"-- 1\n\x0bHello\x0b\n");
        assert_eq!(text(&doc, "1"), Some(b"Hello".as_bstr()));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("talk.notes");
        std::fs::write(&path, SAMPLE).unwrap();

        let doc = NotesParser::new().with_comment_filter(true).load(&path).unwrap();
        assert_eq!(doc.text("2").unwrap(), Some("World"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.notes");

        let err = NotesParser::new().load(&path).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
        assert!(err.to_string().contains("missing.notes"));
    }
}
