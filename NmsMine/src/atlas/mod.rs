//! Icon atlas packing
//!
//! Every distinct icon referenced by an item database is scaled to a fixed
//! cell width and tiled onto one near-square grid. Placement depends only on
//! the sorted icon ids, so the same database always produces the same atlas.
//!
//! The companion map gives grid cells, not pixels; multiply by the cell
//! width to get a pixel rectangle.
//!
//! ```no_run
//! use nmsmine::atlas::pack_atlas;
//! use nmsmine::items::load_item_db;
//! use std::path::Path;
//!
//! let db = load_item_db("items.json")?;
//! let atlas = pack_atlas(&db, Path::new("icons/"), 32)?;
//! atlas.write_image("atlas.png")?;
//! atlas.write_map("atlas.json")?;
//! # Ok::<(), nmsmine::Error>(())
//! ```

mod layout;
mod packer;

pub use layout::{AtlasLayout, AtlasMap, GridCell};
pub use packer::{AtlasOutput, AtlasProgressCallback, SkippedIcon, pack_atlas, pack_atlas_with_progress};

/// Default cell width in pixels.
pub const DEFAULT_CELL_WIDTH: u32 = 32;
