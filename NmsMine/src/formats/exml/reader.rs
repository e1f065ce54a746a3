//! SPDX-FileCopyrightText: 2025 nmsmine contributors
//!
//! SPDX-License-Identifier: MIT
//!
//! EXML file reading

use super::document::{ExmlDocument, PropertyNode};
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// An open element while walking the XML event stream.
enum Frame {
    /// The document root (`<Data>`).
    Root,
    /// A `<Property>` being populated.
    Property(PropertyNode),
    /// Any other element; it and everything beneath it is skipped.
    Ignored,
}

/// Read an EXML file from disk
///
/// Invalid UTF-8 is replaced with U+FFFD and logged.
///
/// # Errors
/// Returns an error if the file cannot be read. Malformed XML is not an error;
/// see [`parse_exml`].
pub fn read_exml<P: AsRef<Path>>(path: P) -> Result<ExmlDocument> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::read(path, e))?;
    tracing::debug!("Read {} ({} bytes)", path.display(), bytes.len());

    let content = String::from_utf8_lossy(&bytes);
    if matches!(content, Cow::Owned(_)) {
        tracing::warn!("{} is not valid UTF-8; invalid bytes replaced", path.display());
    }
    Ok(parse_exml(&content))
}

/// Parse EXML from an XML string
///
/// Decoding is tolerant: if the XML is malformed, the tree built up to the
/// point of failure is returned and a warning is logged.
pub fn parse_exml(content: &str) -> ExmlDocument {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut doc = ExmlDocument::new();
    let mut buf = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let frame = open_frame(&e, &stack, &mut doc);
                stack.push(frame);
            }
            Ok(Event::Empty(e)) => {
                let frame = open_frame(&e, &stack, &mut doc);
                close_frame(frame, &mut stack, &mut doc);
            }
            Ok(Event::End(_)) => {
                if let Some(frame) = stack.pop() {
                    close_frame(frame, &mut stack, &mut doc);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::warn!(
                    "Malformed EXML at byte {}: {e}; keeping partial tree",
                    reader.buffer_position()
                );
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    // Close anything left open by a truncated or malformed document
    while let Some(frame) = stack.pop() {
        close_frame(frame, &mut stack, &mut doc);
    }

    doc
}

fn open_frame(e: &BytesStart<'_>, stack: &[Frame], doc: &mut ExmlDocument) -> Frame {
    match stack.last() {
        None => {
            if let Some(template) = attribute(e, b"template") {
                doc.template = Some(template);
            }
            Frame::Root
        }
        Some(Frame::Root | Frame::Property(_)) if e.name().as_ref() == b"Property" => {
            Frame::Property(PropertyNode {
                name: attribute(e, b"name").unwrap_or_default(),
                value: attribute(e, b"value"),
                children: Vec::new(),
            })
        }
        Some(_) => Frame::Ignored,
    }
}

fn close_frame(frame: Frame, stack: &mut [Frame], doc: &mut ExmlDocument) {
    let Frame::Property(node) = frame else {
        return;
    };
    match stack.last_mut() {
        Some(Frame::Property(parent)) => parent.children.push(node),
        Some(Frame::Root) => doc.properties.push(node),
        _ => {}
    }
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        })
}
