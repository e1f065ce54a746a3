//! Item database persistence

use super::types::Item;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// All extracted items, keyed by id.
///
/// Ordered by id so the written JSON is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemDatabase {
    items: BTreeMap<String, Item>,
}

impl ItemDatabase {
    /// Create an empty database
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item under its id, returning the record it replaced.
    ///
    /// Replacement is wholesale; fields are never merged.
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        let previous = self.items.insert(item.id.clone(), item);
        if let Some(previous) = &previous {
            tracing::debug!("Replacing earlier record for {}", previous.id);
        }
        previous
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over `(id, item)` in id order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Item> {
        self.items.iter()
    }

    /// Distinct non-empty icon ids, sorted.
    pub fn icon_ids(&self) -> BTreeSet<String> {
        self.items
            .values()
            .filter(|item| !item.icon.is_empty())
            .map(|item| item.icon.clone())
            .collect()
    }

    /// Serialize to indented JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the database as indented JSON
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|e| Error::write(path, e))?;
        tracing::info!("Wrote {} items to {}", self.len(), path.display());
        Ok(())
    }

    /// Load a database written by [`ItemDatabase::write_to_file`]
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid database.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        let db: Self = serde_json::from_str(&json)?;
        tracing::debug!("Loaded {} items from {}", db.len(), path.display());
        Ok(db)
    }
}

/// Load an item database from disk
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid database.
pub fn load_item_db<P: AsRef<Path>>(path: P) -> Result<ItemDatabase> {
    ItemDatabase::load(path)
}

impl<'a> IntoIterator for &'a ItemDatabase {
    type Item = (&'a String, &'a Item);
    type IntoIter = btree_map::Iter<'a, String, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Item> for ItemDatabase {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut db = Self::new();
        for item in iter {
            db.insert(item);
        }
        db
    }
}
