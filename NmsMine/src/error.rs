//! Error types for `nmsmine`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `nmsmine` operations.
///
/// Only setup and output failures surface here. Bad per-field data never
/// does: it is absorbed into default values while the records are built.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required input file could not be read.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    // ==================== Parsing Errors ====================
    /// XML serialization error.
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Data layout TOML could not be parsed.
    #[error("invalid data layout: {0}")]
    LayoutError(#[from] toml::de::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    // ==================== Atlas Errors ====================
    /// Failed to encode or save the atlas image.
    #[error("failed to write atlas image {path}: {message}")]
    AtlasImageWrite {
        /// The output image path.
        path: PathBuf,
        /// The encoder error message.
        message: String,
    },

    /// Atlas cells must be at least one pixel wide.
    #[error("invalid atlas cell width: {0}")]
    InvalidCellWidth(u32),

    /// Atlas canvas would not fit in 32-bit pixel dimensions.
    #[error("atlas too large: {icons} icons at {cell_width}px per cell")]
    AtlasTooLarge {
        /// Number of distinct icons.
        icons: usize,
        /// Requested cell width.
        cell_width: u32,
    },

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

impl Error {
    /// Wrap an IO error raised while reading `path`.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Wrap an IO error raised while writing `path`.
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileWrite {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for `nmsmine` operations.
pub type Result<T> = std::result::Result<T, Error>;
