//! DOCX text extraction.
//!
//! A `.docx` file is a zip archive whose document body lives in
//! `word/document.xml` as WordprocessingML:
//! ```xml
//! <w:document>
//!   <w:body>
//!     <w:p><w:r><w:t>First paragraph text</w:t></w:r></w:p>
//!     <w:p/>
//!     <w:p><w:r><w:t>Second paragraph text</w:t></w:r></w:p>
//!   </w:body>
//! </w:document>
//! ```
//! Text runs (`<w:t>`) are collected per paragraph (`<w:p>`) and paragraphs
//! joined with newlines. Empty paragraphs are kept so that blank-line
//! boundaries survive for downstream section detection.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::ExtractError;

/// Extract text from DOCX bytes.
pub fn extract_docx_text(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let mut part = match archive.by_name("word/document.xml") {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(ExtractError::MissingDocumentXml);
        }
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(paragraph_text(&xml)?)
}

/// Walk the WordprocessingML body and join paragraph texts with newlines.
fn paragraph_text(xml: &str) -> Result<String, quick_xml::Error> {
    let mut xml_reader = Reader::from_reader(xml.as_bytes());

    let mut buf = Vec::new();
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text_run = false;

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match tag.as_str() {
                    "w:p" => {
                        in_paragraph = true;
                        current.clear();
                    }
                    "w:t" if in_paragraph => {
                        in_text_run = true;
                    }
                    _ => {}
                }
            }
            Event::Empty(ref e) => {
                // Self-closing <w:p/> is an empty paragraph; keep it so the
                // output preserves blank lines between sections.
                if e.name().as_ref() == b"w:p" {
                    paragraphs.push(String::new());
                }
            }
            Event::Text(ref e) => {
                if in_text_run {
                    current.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Event::End(ref e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match tag.as_str() {
                    "w:t" => {
                        in_text_run = false;
                    }
                    "w:p" if in_paragraph => {
                        in_paragraph = false;
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}
