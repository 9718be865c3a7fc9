//! Properties-in-XML codec
//!
//! Reads and writes the standard properties document:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8" standalone="no"?>
//! <!DOCTYPE properties SYSTEM "http://java.sun.com/dtd/properties.dtd">
//! <properties>
//!   <comment>optional</comment>
//!   <entry key="width">800.0</entry>
//! </properties>
//! ```
//!
//! Values are taken verbatim: whitespace is never trimmed, entity and
//! character references are resolved and CDATA sections are copied as-is.

use std::collections::BTreeMap;

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;

use crate::constants::xml::{
    COMMENT, DOCTYPE, ENCODING, ENTRY, INDENT_SIZE, KEY_ATTRIBUTE, ROOT, STANDALONE, VERSION,
};

/// Parsed form of a properties file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesDocument {
    pub comment: Option<String>,
    pub entries: BTreeMap<String, String>,
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CDATA section is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("no <properties> root element")]
    MissingRoot,

    #[error("unexpected element <{0}>")]
    UnexpectedElement(String),

    #[error("unexpected text {0:?} outside of an entry")]
    UnexpectedText(String),

    #[error("<entry> without a `key` attribute")]
    MissingKey,

    #[error("more than one <comment> element")]
    DuplicateComment,

    #[error("document ends inside <{0}>")]
    Truncated(&'static str),
}

/// Parse a properties document
pub fn parse(source: &str) -> Result<PropertiesDocument, DocumentError> {
    let mut reader = Reader::from_str(source);
    let mut document = PropertiesDocument::default();
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if !seen_root && e.name().as_ref() == ROOT.as_bytes() => {
                seen_root = true;
                read_body(&mut reader, &mut document)?;
            }
            Event::Empty(e) if !seen_root && e.name().as_ref() == ROOT.as_bytes() => {
                seen_root = true;
            }
            Event::Start(e) | Event::Empty(e) => {
                return Err(DocumentError::UnexpectedElement(element_name(&e)));
            }
            Event::Text(text) => {
                if !is_blank(&text) {
                    return Err(DocumentError::UnexpectedText(text.unescape()?.into_owned()));
                }
            }
            Event::CData(data) => {
                let data = data.into_inner();
                return Err(DocumentError::UnexpectedText(
                    std::str::from_utf8(&data)?.to_string(),
                ));
            }
            Event::Eof => break,
            // declaration, doctype, comments, processing instructions
            _ => {}
        }
    }

    if seen_root {
        Ok(document)
    } else {
        Err(DocumentError::MissingRoot)
    }
}

/// Children of `<properties>`, up to and including its end tag
fn read_body(
    reader: &mut Reader<&[u8]>,
    document: &mut PropertiesDocument,
) -> Result<(), DocumentError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                name if name == ENTRY.as_bytes() => {
                    let key = entry_key(&e)?;
                    let value = read_text(reader, ENTRY)?;
                    document.entries.insert(key, value);
                }
                name if name == COMMENT.as_bytes() => {
                    let comment = read_text(reader, COMMENT)?;
                    set_comment(document, comment)?;
                }
                _ => return Err(DocumentError::UnexpectedElement(element_name(&e))),
            },
            Event::Empty(e) => match e.name().as_ref() {
                name if name == ENTRY.as_bytes() => {
                    document.entries.insert(entry_key(&e)?, String::new());
                }
                name if name == COMMENT.as_bytes() => set_comment(document, String::new())?,
                _ => return Err(DocumentError::UnexpectedElement(element_name(&e))),
            },
            // the reader checks end names, so this is </properties>
            Event::End(_) => return Ok(()),
            Event::Text(text) => {
                if !is_blank(&text) {
                    return Err(DocumentError::UnexpectedText(text.unescape()?.into_owned()));
                }
            }
            Event::CData(data) => {
                let data = data.into_inner();
                return Err(DocumentError::UnexpectedText(
                    std::str::from_utf8(&data)?.to_string(),
                ));
            }
            Event::Eof => return Err(DocumentError::Truncated(ROOT)),
            _ => {}
        }
    }
}

/// Text content of a leaf element, up to and including its end tag
fn read_text(reader: &mut Reader<&[u8]>, element: &'static str) -> Result<String, DocumentError> {
    let mut content = String::new();

    loop {
        match reader.read_event()? {
            Event::Text(text) => content.push_str(&text.unescape()?),
            Event::CData(data) => {
                let data = data.into_inner();
                content.push_str(std::str::from_utf8(&data)?);
            }
            Event::End(_) => return Ok(content),
            Event::Start(e) | Event::Empty(e) => {
                return Err(DocumentError::UnexpectedElement(element_name(&e)));
            }
            Event::Eof => return Err(DocumentError::Truncated(element)),
            _ => {}
        }
    }
}

fn set_comment(document: &mut PropertiesDocument, comment: String) -> Result<(), DocumentError> {
    if document.comment.is_some() {
        return Err(DocumentError::DuplicateComment);
    }
    document.comment = Some(comment);
    Ok(())
}

fn entry_key(element: &BytesStart<'_>) -> Result<String, DocumentError> {
    for attribute in element.attributes() {
        let attribute = attribute?;
        if attribute.key.as_ref() == KEY_ATTRIBUTE.as_bytes() {
            return Ok(attribute.unescape_value()?.into_owned());
        }
    }
    Err(DocumentError::MissingKey)
}

fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

fn is_blank(text: &BytesText<'_>) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

/// Render a properties document
///
/// Entries come out in key order, so rendering the same mapping twice
/// yields identical bytes.
pub fn render(
    comment: Option<&str>,
    entries: &BTreeMap<String, String>,
) -> Result<Vec<u8>, DocumentError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);

    writer.write_event(Event::Decl(BytesDecl::new(
        VERSION,
        Some(ENCODING),
        Some(STANDALONE),
    )))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT)))?;

    if let Some(comment) = comment {
        writer
            .create_element(COMMENT)
            .write_text_content(BytesText::new(comment))?;
    }

    for (key, value) in entries {
        writer
            .create_element(ENTRY)
            .with_attribute((KEY_ATTRIBUTE, key.as_str()))
            .write_text_content(BytesText::new(value))?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT)))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}
