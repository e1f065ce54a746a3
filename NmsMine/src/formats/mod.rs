//! File format handlers for No Man's Sky data files

pub mod exml;

// Re-export main document types
pub use exml::{
    ExmlDocument, PropertyNode, find_exml_files, parse_exml, read_exml, serialize_exml, write_exml,
};
