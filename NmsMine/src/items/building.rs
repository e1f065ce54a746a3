//! Base-building metadata merge
//!
//! The base-building table is keyed by the same ids as the product table.
//! Its `Objects` list is read after all item tables have been extracted and
//! attached to the matching records.

use super::database::ItemDatabase;
use super::schema::{BUILDING_SCHEMA, BuildingObject};
use crate::error::Result;
use crate::formats::exml::{ExmlDocument, read_exml};
use crate::localization::StringTable;
use std::path::Path;

/// Name of the top-level property listing buildable objects.
const OBJECTS_PROPERTY: &str = "Objects";

/// Outcome of a building merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of items that received building info.
    pub attached: usize,
    /// Object ids with no matching item; their info was discarded.
    pub unresolved: Vec<String>,
}

impl MergeReport {
    fn absorb(&mut self, other: MergeReport) {
        self.attached += other.attached;
        self.unresolved.extend(other.unresolved);
    }
}

/// Attach building info from a decoded base-building table.
///
/// Objects whose id matches no item are reported and dropped; the database
/// never grows during a merge.
pub fn merge_building_document(doc: &ExmlDocument, db: &mut ItemDatabase) -> MergeReport {
    // Building fields are never localized
    let strings = StringTable::new();
    let mut report = MergeReport::default();

    for objects in doc.find(OBJECTS_PROPERTY) {
        for entry in &objects.children {
            let BuildingObject { id, info } = BUILDING_SCHEMA.extract(entry, &strings);
            match db.get_mut(&id) {
                Some(item) => {
                    item.building_info = Some(info);
                    report.attached += 1;
                }
                None => {
                    tracing::warn!("Can't find {id} in items");
                    report.unresolved.push(id);
                }
            }
        }
    }

    report
}

/// Read a base-building table from disk and merge it into `db`.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn merge_building_file<P: AsRef<Path>>(path: P, db: &mut ItemDatabase) -> Result<MergeReport> {
    let path = path.as_ref();
    let doc = read_exml(path)?;
    let report = merge_building_document(&doc, db);
    tracing::debug!(
        "Attached building info to {} items from {} ({} unresolved)",
        report.attached,
        path.display(),
        report.unresolved.len()
    );
    Ok(report)
}

/// Merge several base-building tables in order.
///
/// # Errors
/// Returns an error if any file cannot be read.
pub fn merge_building_files<P: AsRef<Path>>(paths: &[P], db: &mut ItemDatabase) -> Result<MergeReport> {
    let mut report = MergeReport::default();
    for path in paths {
        report.absorb(merge_building_file(path, db)?);
    }
    Ok(report)
}
