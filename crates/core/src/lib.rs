//! Core domain types, the notes file parser and the notes file formatter
//! shared by the exporter and the interactive viewer.

pub mod error;
pub mod format;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use format::NotesFormatter;
pub use parser::NotesParser;
pub use types::{NotesDocument, SlideEvent};
