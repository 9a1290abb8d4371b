//! XML exporter implementation.

use notes_core::error::decode;
use notes_core::{NotesDocument, Result};
use serde::Serialize;
use std::io::Write;

/// Declaration written ahead of the root element.
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Root element of the exported document.
#[derive(Debug, Serialize)]
#[serde(rename = "notes")]
struct NotesXml<'a> {
    #[serde(rename = "note")]
    notes: Vec<NoteXml<'a>>,
}

/// One slide's note.
#[derive(Debug, Serialize)]
struct NoteXml<'a> {
    #[serde(rename = "@number")]
    number: &'a str,
    #[serde(rename = "$text")]
    text: &'a str,
}

/// Exporter turning parsed notes into an XML document.
pub struct XmlExporter;

impl XmlExporter {
    /// Create a new XML exporter.
    pub fn new() -> Self {
        Self
    }

    /// Serialize the document to an XML string, declaration included.
    ///
    /// Fails if any identifier or note text is not valid UTF-8.
    pub fn export(&self, document: &NotesDocument) -> Result<String> {
        let mut notes = Vec::with_capacity(document.len());
        for (identifier, text) in document.iter() {
            let number = decode(identifier, || format!("slide identifier {:?}", identifier))?;
            let text = decode(text, || format!("note for slide {:?}", identifier))?;
            notes.push(NoteXml { number, text });
        }

        let body = quick_xml::se::to_string(&NotesXml { notes })
            .map_err(|e| notes_core::Error::XmlError(e.to_string()))?;

        log::info!("Exported {} notes", document.len());
        Ok(format!("{}{}", XML_DECLARATION, body))
    }

    /// Export the document and write it, followed by a newline.
    pub fn write<W: Write>(&self, document: &NotesDocument, mut writer: W) -> Result<()> {
        let xml = self.export(document)?;
        writer.write_all(xml.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for XmlExporter {
    fn default() -> Self {
        Self::new()
    }
}
