//! Item table extraction
//!
//! Product, substance and technology tables share one layout: a single
//! top-level property whose children are item entries. Each entry becomes an
//! [`Item`] through [`ITEM_SCHEMA`], with display strings resolved against
//! the [`StringTable`].

use super::database::ItemDatabase;
use super::schema::ITEM_SCHEMA;
use super::types::Item;
use crate::error::Result;
use crate::formats::exml::{ExmlDocument, PropertyNode, read_exml};
use crate::localization::StringTable;
use std::path::Path;

/// Build one item from a table entry.
pub fn extract_item(entry: &PropertyNode, strings: &StringTable) -> Item {
    ITEM_SCHEMA.extract(entry, strings)
}

/// Extracts item tables into a database using a finished string table.
#[derive(Debug, Clone, Copy)]
pub struct ItemExtractor<'a> {
    strings: &'a StringTable,
}

impl<'a> ItemExtractor<'a> {
    pub fn new(strings: &'a StringTable) -> Self {
        Self { strings }
    }

    /// Insert every entry of a decoded item table into `db`.
    ///
    /// Entries overwrite earlier records with the same id. Entries without an
    /// id are skipped. Returns the number of items inserted.
    pub fn load_document(&self, doc: &ExmlDocument, db: &mut ItemDatabase) -> usize {
        let mut inserted = 0;
        for entry in doc.entries() {
            let item = extract_item(entry, self.strings);
            if item.id.is_empty() {
                tracing::warn!("Skipping table entry without an ID");
                continue;
            }
            db.insert(item);
            inserted += 1;
        }
        inserted
    }

    /// Read an item table from disk and insert its entries into `db`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load_file<P: AsRef<Path>>(&self, path: P, db: &mut ItemDatabase) -> Result<usize> {
        let path = path.as_ref();
        let doc = read_exml(path)?;
        let count = self.load_document(&doc, db);
        tracing::debug!("Extracted {count} items from {}", path.display());
        Ok(count)
    }
}
