//! SPDX-FileCopyrightText: 2025 nmsmine contributors
//!
//! SPDX-License-Identifier: MIT
//!
//! EXML file writing

use super::document::{ExmlDocument, PropertyNode};
use crate::error::{Error, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::fs;
use std::path::Path;

/// Write an EXML document to disk
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_exml<P: AsRef<Path>>(doc: &ExmlDocument, path: P) -> Result<()> {
    let path = path.as_ref();
    let xml = serialize_exml(doc)?;
    fs::write(path, xml).map_err(|e| Error::write(path, e))?;
    Ok(())
}

/// Serialize an EXML document to an XML string
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn serialize_exml(doc: &ExmlDocument) -> Result<String> {
    let mut output = Vec::new();
    let mut writer = Writer::new_with_indent(&mut output, b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut data = BytesStart::new("Data");
    if let Some(template) = &doc.template {
        data.push_attribute(("template", template.as_str()));
    }

    if doc.properties.is_empty() {
        writer.write_event(Event::Empty(data))?;
    } else {
        writer.write_event(Event::Start(data))?;
        for node in &doc.properties {
            write_node(&mut writer, node)?;
        }
        writer.write_event(Event::End(BytesEnd::new("Data")))?;
    }

    Ok(String::from_utf8(output)?)
}

fn write_node<W: std::io::Write>(writer: &mut Writer<W>, node: &PropertyNode) -> Result<()> {
    let mut tag = BytesStart::new("Property");
    tag.push_attribute(("name", node.name.as_str()));
    if let Some(value) = &node.value {
        tag.push_attribute(("value", value.as_str()));
    }

    if node.children.is_empty() {
        writer.write_event(Event::Empty(tag))?;
        return Ok(());
    }

    writer.write_event(Event::Start(tag))?;
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new("Property")))?;
    Ok(())
}
