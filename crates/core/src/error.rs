//! Error types for speaker notes processing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, exporting or viewing notes.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the notes file.
    #[error("Failed to read notes file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Text was not valid UTF-8 at the point it had to be emitted.
    #[error("Invalid UTF-8 in {context}: {source}")]
    Encoding {
        context: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The terminal does not provide a usable clear-screen sequence.
    #[error("Terminal capability error: {0}")]
    TerminalCapability(String),

    /// Failed to serialize the XML document.
    #[error("XML serialization error: {0}")]
    XmlError(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Decode `bytes` as UTF-8, describing what was being decoded on failure.
pub fn decode<'a>(bytes: &'a [u8], context: impl FnOnce() -> String) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|source| Error::Encoding {
        context: context(),
        source,
    })
}
