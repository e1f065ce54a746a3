//! Database export pipeline
//!
//! Item extraction needs a complete string table, and the building merge
//! needs every item in place. The stages are separate types, each consuming
//! the one before it, so they can only run in that order:
//!
//! ```no_run
//! use nmsmine::pipeline::{DataLayout, ExportPipeline};
//! use std::path::Path;
//!
//! let layout = DataLayout::bundled()?.resolve(Path::new("/games/nms/PCBANKS"));
//! let output = ExportPipeline::new(layout)
//!     .localize()?
//!     .extract_items()?
//!     .merge_buildings()?;
//! output.database.write_to_file("items.json")?;
//! # Ok::<(), nmsmine::Error>(())
//! ```

mod layout;

pub use layout::DataLayout;

use crate::error::Result;
use crate::items::{ItemDatabase, ItemExtractor, merge_building_files};
use crate::localization::StringTable;

/// Counters collected while the pipeline runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Strings in the final string table.
    pub strings: usize,
    /// Items in the final database.
    pub items: usize,
    /// Items that received building info.
    pub buildings: usize,
    /// Base-building ids with no matching item.
    pub unresolved: Vec<String>,
}

/// Entry point; holds the resolved layout.
#[derive(Debug, Clone)]
pub struct ExportPipeline {
    layout: DataLayout,
}

impl ExportPipeline {
    /// Start a pipeline over a layout whose paths are already resolved.
    #[must_use]
    pub fn new(layout: DataLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    /// Load every language table, in layout order.
    ///
    /// # Errors
    /// Returns an error if a language table cannot be read.
    pub fn localize(self) -> Result<LocalizedStage> {
        let mut strings = StringTable::new();
        for path in &self.layout.localization {
            strings.load_file(path)?;
        }
        tracing::info!("Loaded {} localized strings", strings.len());

        Ok(LocalizedStage {
            layout: self.layout,
            strings,
        })
    }

    /// Run every stage.
    ///
    /// # Errors
    /// Returns an error if any input file cannot be read.
    pub fn run(self) -> Result<PipelineOutput> {
        self.localize()?.extract_items()?.merge_buildings()
    }
}

/// String table complete; items not yet read.
#[derive(Debug, Clone)]
pub struct LocalizedStage {
    layout: DataLayout,
    strings: StringTable,
}

impl LocalizedStage {
    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub fn into_strings(self) -> StringTable {
        self.strings
    }

    /// Extract every item table, in layout order.
    ///
    /// # Errors
    /// Returns an error if an item table cannot be read.
    pub fn extract_items(self) -> Result<ExtractedStage> {
        let mut database = ItemDatabase::new();
        let extractor = ItemExtractor::new(&self.strings);
        for path in &self.layout.items {
            extractor.load_file(path, &mut database)?;
        }
        tracing::info!("Extracted {} items", database.len());

        Ok(ExtractedStage {
            layout: self.layout,
            strings: self.strings.len(),
            database,
        })
    }
}

/// Items extracted; building info not yet attached.
#[derive(Debug, Clone)]
pub struct ExtractedStage {
    layout: DataLayout,
    strings: usize,
    database: ItemDatabase,
}

impl ExtractedStage {
    pub fn database(&self) -> &ItemDatabase {
        &self.database
    }

    /// Attach base-building info to the extracted items.
    ///
    /// # Errors
    /// Returns an error if a base-building table cannot be read.
    pub fn merge_buildings(mut self) -> Result<PipelineOutput> {
        let report = merge_building_files(&self.layout.buildings, &mut self.database)?;
        tracing::info!(
            "Attached building info to {} items ({} unresolved)",
            report.attached,
            report.unresolved.len()
        );

        let stats = PipelineStats {
            strings: self.strings,
            items: self.database.len(),
            buildings: report.attached,
            unresolved: report.unresolved,
        };
        Ok(PipelineOutput {
            database: self.database,
            stats,
        })
    }
}

/// Finished database and run counters.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub database: ItemDatabase,
    pub stats: PipelineStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use std::path::PathBuf;

    const LANGUAGE: &str = r#"<Data template="TkLocalisationTable"><Property name="Table">
  <Property value="TkLocalisationEntry.xml">
    <Property name="Id" value="UI_LAUNCH_FUEL_NAME" />
    <Property name="USEnglish" value="VariableSizeString.xml"><Property name="Value" value="STARSHIP LAUNCH FUEL" /></Property>
  </Property>
</Property></Data>"#;

    const PRODUCTS: &str = r#"<Data template="GcProductTable"><Property name="Table">
  <Property value="GcProductData.xml">
    <Property name="ID" value="LAUNCHFUEL" />
    <Property name="Name" value="UI_LAUNCH_FUEL_NAME" />
  </Property>
  <Property value="GcProductData.xml">
    <Property name="ID" value="BUILDSAVE" />
  </Property>
</Property></Data>"#;

    const BUILDINGS: &str = r#"<Data template="GcBaseBuildingTable"><Property name="Objects">
  <Property value="GcBaseBuildingEntry.xml">
    <Property name="ID" value="BUILDSAVE" />
    <Property name="BuildableOnPlanet" value="True" />
  </Property>
  <Property value="GcBaseBuildingEntry.xml">
    <Property name="ID" value="MISSING" />
  </Property>
</Property></Data>"#;

    fn write_data(dir: &std::path::Path) -> DataLayout {
        fs::write(dir.join("lang.exml"), LANGUAGE).unwrap();
        fs::write(dir.join("products.exml"), PRODUCTS).unwrap();
        fs::write(dir.join("buildings.exml"), BUILDINGS).unwrap();
        DataLayout {
            localization: vec![PathBuf::from("lang.exml")],
            items: vec![PathBuf::from("products.exml")],
            buildings: vec![PathBuf::from("buildings.exml")],
        }
        .resolve(dir)
    }

    #[test]
    fn test_stages_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let layout = write_data(dir.path());

        let localized = ExportPipeline::new(layout).localize().unwrap();
        assert_eq!(localized.strings().lookup("UI_LAUNCH_FUEL_NAME"), "STARSHIP LAUNCH FUEL");

        let extracted = localized.extract_items().unwrap();
        assert_eq!(extracted.database().len(), 2);
        assert!(extracted.database().get("BUILDSAVE").unwrap().building_info.is_none());

        let output = extracted.merge_buildings().unwrap();
        assert_eq!(
            output.stats,
            PipelineStats {
                strings: 1,
                items: 2,
                buildings: 1,
                unresolved: vec!["MISSING".to_string()],
            }
        );
        assert_eq!(output.database.get("LAUNCHFUEL").unwrap().name, "STARSHIP LAUNCH FUEL");
        assert!(
            output.database.get("BUILDSAVE").unwrap().building_info.as_ref().unwrap().buildable_on_planet
        );
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let layout = DataLayout {
            localization: vec![PathBuf::from("nope.exml")],
            items: Vec::new(),
            buildings: Vec::new(),
        }
        .resolve(dir.path());

        let err = ExportPipeline::new(layout).run().unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_empty_layout() {
        let layout = DataLayout::from_toml("").unwrap();
        let output = ExportPipeline::new(layout).run().unwrap();
        assert!(output.database.is_empty());
        assert_eq!(output.stats, PipelineStats::default());
    }
}
