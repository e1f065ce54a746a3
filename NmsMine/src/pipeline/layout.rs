//! Data layout: which files the pipeline reads
//!
//! A layout is a small TOML file listing paths relative to an unpacked data
//! directory. The default layout is bundled into the binary.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Bundled default layout
const NMS_LAYOUT: &str = include_str!("../../layouts/nms.toml");

/// Relative paths of the language, item and base-building tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLayout {
    #[serde(default)]
    pub localization: Vec<PathBuf>,
    #[serde(default)]
    pub items: Vec<PathBuf>,
    #[serde(default)]
    pub buildings: Vec<PathBuf>,
}

impl DataLayout {
    /// The bundled default layout.
    ///
    /// # Errors
    /// Returns an error if the bundled TOML does not parse.
    pub fn bundled() -> Result<Self> {
        Self::from_toml(NMS_LAYOUT)
    }

    /// Parse a layout from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text is not a valid layout.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a layout file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        let layout = Self::from_toml(&text)?;
        tracing::debug!("Loaded data layout from {}", path.display());
        Ok(layout)
    }

    /// Join every path onto `data_dir`.
    #[must_use]
    pub fn resolve(&self, data_dir: &Path) -> Self {
        let join = |paths: &[PathBuf]| paths.iter().map(|p| data_dir.join(p)).collect();
        Self {
            localization: join(&self.localization),
            items: join(&self.items),
            buildings: join(&self.buildings),
        }
    }
}
