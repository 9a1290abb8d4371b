//! Interactive speaker notes viewer.
//!
//! Reads slide identifiers line by line, and for each one clears the
//! terminal and prints the matching note.

pub mod events;
pub mod render;
pub mod terminal;
pub mod viewer;

pub use events::SlideEvents;
pub use render::{render, Frame, PLACEHOLDER};
pub use terminal::Terminal;
pub use viewer::Viewer;
