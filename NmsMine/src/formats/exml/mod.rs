//! EXML (tagged-tree XML) format module
//!
//! EXML is the game's text rendering of its metadata tables: every element is
//! a `<Property name="..." value="...">`, optionally nesting further
//! properties, under a single `<Data template="...">` root.

mod batch;
mod document;
mod reader;
mod writer;

pub use batch::{EXML_EXTENSION, find_exml_files};
pub use document::{ExmlDocument, PropertyNode};
pub use reader::{parse_exml, read_exml};
pub use writer::{serialize_exml, write_exml};
