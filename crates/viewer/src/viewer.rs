//! The viewer run loop.

use crate::events::SlideEvents;
use crate::render::render;
use crate::terminal::Terminal;
use notes_core::{NotesDocument, Result};
use std::io::{BufRead, Write};

/// Renders notes for each slide identifier read from an input stream.
pub struct Viewer {
    document: NotesDocument,
    terminal: Terminal,
}

impl Viewer {
    /// Create a viewer over parsed notes and resolved terminal capabilities.
    pub fn new(document: NotesDocument, terminal: Terminal) -> Self {
        Self { document, terminal }
    }

    /// Process slide events until the input is exhausted.
    ///
    /// Each event is fully rendered and flushed before the next line is read.
    /// Returns `Ok(())` at end of input; read, write and decoding errors are
    /// returned immediately.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<()> {
        for event in SlideEvents::new(input) {
            let event = event?;
            let frame = render(&self.document, &event)?;
            log::debug!(
                "Slide {:?}: {}",
                event.raw(),
                if frame.is_placeholder() { "no note" } else { "note found" }
            );

            self.terminal.clear_screen(out)?;
            frame.write_to(out)?;
            out.flush()?;
        }

        log::debug!("End of input");
        Ok(())
    }
}
