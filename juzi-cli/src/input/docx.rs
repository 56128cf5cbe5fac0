//! Text extraction from .docx files
//!
//! A .docx file is a zip container; the document body lives in
//! `word/document.xml`. Extraction collects the `<w:t>` text runs of each
//! `<w:p>` paragraph and joins paragraphs with newlines. Headers and footers
//! live in separate archive members and are deliberately not extracted.

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DOCUMENT_MEMBER: &str = "word/document.xml";

/// Extract the document text of a .docx file as plain Unicode.
pub fn extract_text(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("Not a valid .docx (zip) file: {}", path.display()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_MEMBER)
        .with_context(|| format!("Missing {DOCUMENT_MEMBER} in {}", path.display()))?
        .read_to_string(&mut xml)
        .with_context(|| format!("Failed to read {DOCUMENT_MEMBER} from {}", path.display()))?;

    parse_document_xml(&xml)
}

/// Collects `<w:t>` runs per `<w:p>` paragraph from WordprocessingML.
fn parse_document_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader
            .read_event()
            .context("Malformed XML in document body")?
        {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            // An empty paragraph still contributes a blank line.
            Event::Empty(e) if e.name().as_ref() == b"w:p" => paragraphs.push(String::new()),
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                current.push_str(&t.unescape().context("Invalid XML escape in text run")?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}
