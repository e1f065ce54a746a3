//! Item records and their extraction from data tables
//!
//! - [`convert`] - best-effort node-to-value conversions
//! - [`schema`] - field-name to conversion-rule tables
//! - [`extract`] - item table loading
//! - [`building`] - base-building metadata merge
//! - [`database`] - the id-keyed item database and its JSON persistence

pub mod building;
pub mod convert;
pub mod database;
pub mod extract;
pub mod schema;
mod types;

pub use building::{MergeReport, merge_building_document, merge_building_file, merge_building_files};
pub use database::{ItemDatabase, load_item_db};
pub use extract::{ItemExtractor, extract_item};
pub use schema::{FieldRule, KeySource, Schema};
pub use types::{Item, ItemBuildingInfo, ItemColor, ItemCost, ItemRequirement, ItemStatBonus};
