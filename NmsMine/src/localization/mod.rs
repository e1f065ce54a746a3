//! Localization string table
//!
//! Built from the game's `*_USENGLISH.exml` language tables. Each table entry
//! looks like:
//!
//! ```xml
//! <Property value="TkLocalisationEntry.xml">
//!   <Property name="Id" value="UI_FUEL_1_NAME" />
//!   <Property name="USEnglish" value="VariableSizeString.xml">
//!     <Property name="Value" value="CARBON" />
//!   </Property>
//! </Property>
//! ```
//!
//! Several language files are usually loaded into one table; later files
//! overwrite earlier ones for the same id.

use crate::error::Result;
use crate::formats::exml::{ExmlDocument, PropertyNode, read_exml};
use crate::items::convert;
use indexmap::IndexMap;
use std::path::Path;

/// Field holding the string id of a localization entry.
const ID_FIELD: &str = "Id";

/// Field holding the (indirect) English text of a localization entry.
const TEXT_FIELD: &str = "USEnglish";

/// Mapping from string id to localized text.
///
/// Lookups that miss return an empty string rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    strings: IndexMap<String, String>,
}

impl StringTable {
    /// Create a new empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Look up a string, returning `None` on a miss
    pub fn get(&self, id: &str) -> Option<&str> {
        self.strings.get(id).map(String::as_str)
    }

    /// Look up a string, returning `""` on a miss
    pub fn lookup(&self, id: &str) -> &str {
        self.get(id).unwrap_or_default()
    }

    /// Insert or replace a string, returning the previous text
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.strings.insert(id.into(), text.into())
    }

    /// Iterate over `(id, text)` pairs in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.strings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Add every entry of a decoded language table.
    ///
    /// Entries missing either an id or a text are dropped. Returns the number
    /// of entries recorded.
    pub fn load_document(&mut self, doc: &ExmlDocument) -> usize {
        doc.entries()
            .iter()
            .filter(|entry| self.load_entry(entry))
            .count()
    }

    /// Read a language table from disk and add its entries.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let doc = read_exml(path)?;
        let count = self.load_document(&doc);
        tracing::debug!("Loaded {count} strings from {}", path.display());
        Ok(count)
    }

    fn load_entry(&mut self, entry: &PropertyNode) -> bool {
        let mut id = "";
        let mut text = "";

        for field in &entry.children {
            match field.name.as_str() {
                ID_FIELD => id = convert::scalar(field),
                TEXT_FIELD => text = convert::indirect(field),
                _ => {}
            }
        }

        if id.is_empty() || text.is_empty() {
            return false;
        }
        self.strings.insert(id.to_string(), text.to_string());
        true
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            strings: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::exml::parse_exml;

    fn language_table(entries: &[(&str, &str)]) -> String {
        let mut xml = String::from("<Data template=\"TkLocalisationTable\"><Property name=\"Table\">");
        for (id, text) in entries {
            xml.push_str(&format!(
                "<Property value=\"TkLocalisationEntry.xml\">\
                   <Property name=\"Id\" value=\"{id}\" />\
                   <Property name=\"French\" value=\"VariableSizeString.xml\"><Property name=\"Value\" value=\"ignored\" /></Property>\
                   <Property name=\"USEnglish\" value=\"VariableSizeString.xml\"><Property name=\"Value\" value=\"{text}\" /></Property>\
                 </Property>"
            ));
        }
        xml.push_str("</Property></Data>");
        xml
    }

    #[test]
    fn test_load_document() {
        let doc = parse_exml(&language_table(&[("S1", "Explosive"), ("S2", "Carbon")]));
        let mut table = StringTable::new();

        assert_eq!(table.load_document(&doc), 2);
        assert_eq!(table.lookup("S1"), "Explosive");
        assert_eq!(table.lookup("S2"), "Carbon");
    }

    #[test]
    fn test_miss_is_empty_string() {
        let table: StringTable = [("S1", "Explosive")].into_iter().collect();
        assert_eq!(table.lookup("S9"), "");
        assert_eq!(table.get("S9"), None);
    }

    #[test]
    fn test_incomplete_entries_dropped() {
        let doc = parse_exml(
            r#"<Data><Property name="Table">
                 <Property><Property name="Id" value="NO_TEXT" /></Property>
                 <Property><Property name="Id" value="EMPTY_TEXT" />
                   <Property name="USEnglish"><Property name="Value" value="" /></Property></Property>
                 <Property><Property name="USEnglish"><Property name="Value" value="No id" /></Property></Property>
                 <Property><Property name="Id" value="NO_CHILD" /><Property name="USEnglish" /></Property>
               </Property></Data>"#,
        );
        let mut table = StringTable::new();
        assert_eq!(table.load_document(&doc), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_later_file_overwrites() {
        let mut table = StringTable::new();
        table.load_document(&parse_exml(&language_table(&[("S1", "Old"), ("S2", "Kept")])));
        table.load_document(&parse_exml(&language_table(&[("S1", "New")])));

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("S1"), "New");
        assert_eq!(table.lookup("S2"), "Kept");
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("NMS_LOC1_USENGLISH.exml");
        std::fs::write(&path, language_table(&[("UI_FUEL_1_NAME", "CARBON")])).unwrap();

        let mut table = StringTable::new();
        assert_eq!(table.load_file(&path).unwrap(), 1);
        assert_eq!(table.lookup("UI_FUEL_1_NAME"), "CARBON");
    }
}
