//! # nmsmine
//!
//! Mines No Man's Sky's unpacked data tables into a JSON item database, and
//! packs item icons into a single sprite atlas.
//!
//! ## Modules
//!
//! - **formats::exml** - the game's XML property-tree format
//! - **localization** - id to English string table
//! - **items** - item records, field schemas, extraction and the database
//! - **pipeline** - ordered localization, extraction and building-merge stages
//! - **atlas** - deterministic grid packing of item icons
//!
//! ## Quick Start
//!
//! ### Building the Item Database
//!
//! ```no_run
//! use nmsmine::pipeline::{DataLayout, ExportPipeline};
//! use std::path::Path;
//!
//! let layout = DataLayout::bundled()?.resolve(Path::new("PCBANKS"));
//! let output = ExportPipeline::new(layout).run()?;
//! output.database.write_to_file("items.json")?;
//! # Ok::<(), nmsmine::Error>(())
//! ```
//!
//! ### Reading a Single Table
//!
//! ```no_run
//! use nmsmine::prelude::*;
//!
//! let mut strings = StringTable::new();
//! strings.load_file("LANGUAGE/NMS_LOC1_USENGLISH.exml")?;
//!
//! let mut db = ItemDatabase::new();
//! ItemExtractor::new(&strings)
//!     .load_file("METADATA/REALITY/TABLES/NMS_REALITY_GCSUBSTANCETABLE.exml", &mut db)?;
//! println!("{}", db.get("FUEL1").map_or("", |item| item.name.as_str()));
//! # Ok::<(), nmsmine::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `nmsmine` command-line binary

pub mod atlas;
pub mod error;
pub mod formats;
pub mod items;
pub mod localization;
pub mod pipeline;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::exml::{ExmlDocument, PropertyNode, parse_exml, read_exml};
    pub use crate::localization::StringTable;
    pub use crate::items::{
        Item, ItemBuildingInfo, ItemCost, ItemDatabase, ItemExtractor, ItemRequirement,
        ItemStatBonus, MergeReport, load_item_db, merge_building_file,
    };
    pub use crate::pipeline::{DataLayout, ExportPipeline, PipelineOutput, PipelineStats};
    pub use crate::atlas::{AtlasLayout, AtlasMap, AtlasOutput, GridCell, pack_atlas};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
