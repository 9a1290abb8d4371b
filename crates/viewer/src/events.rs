//! Slide events read from an input stream.

use notes_core::SlideEvent;
use std::io::{self, BufRead};

/// Iterator over slide events, one per input line.
///
/// Ends when the reader is exhausted. A read error is yielded once and
/// ends the iteration.
pub struct SlideEvents<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> SlideEvents<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for SlideEvents<R> {
    type Item = io::Result<SlideEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(Ok(SlideEvent::new(line))),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
