//! Terminal capabilities needed by the viewer.

use notes_core::{Error, Result};
use std::io::Write;
use terminfo::{capability::ClearScreen, Database};

/// Resolved terminal capabilities, set up once before rendering starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    clear: Vec<u8>,
}

impl Terminal {
    /// Resolve capabilities for the terminal named by `TERM`.
    pub fn from_env() -> Result<Self> {
        let database = Database::from_env().map_err(|e| {
            Error::TerminalCapability(format!("cannot load terminfo entry for TERM: {}", e))
        })?;
        Self::from_database(&database)
    }

    /// Resolve capabilities for a terminal type.
    pub fn for_term(term: &str) -> Result<Self> {
        let database = Database::from_name(term).map_err(|e| {
            Error::TerminalCapability(format!("cannot load terminfo entry for '{}': {}", term, e))
        })?;
        Self::from_database(&database)
    }

    /// Take the clear-screen sequence from a loaded terminfo entry.
    pub fn from_database(database: &Database) -> Result<Self> {
        let clear = database.get::<ClearScreen>().ok_or_else(|| {
            Error::TerminalCapability(format!(
                "terminal '{}' has no clear capability",
                database.name()
            ))
        })?;

        let clear = clear.as_ref().to_vec();
        log::debug!("Using clear sequence {:?} for terminal '{}'", clear, database.name());
        Ok(Self { clear })
    }

    /// Use a fixed clear sequence.
    pub fn with_clear_sequence(clear: impl Into<Vec<u8>>) -> Self {
        Self {
            clear: clear.into(),
        }
    }

    /// The clear-screen control sequence.
    pub fn clear_sequence(&self) -> &[u8] {
        &self.clear
    }

    /// Write the clear-screen sequence.
    pub fn clear_screen<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(&self.clear)
    }
}
