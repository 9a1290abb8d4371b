//! XML export backend for speaker notes.
//!
//! Produces a `<notes>` document with one `<note number="...">` element per
//! slide.

pub mod exporter;

pub use exporter::XmlExporter;
