//! CLI command for building the item database

use std::path::Path;
use std::time::Instant;

use anyhow::Context;

use crate::cli::progress::{DISK, GEAR, LINK, LOOKING_GLASS, print_detail, print_done, print_step};
use crate::pipeline::{DataLayout, ExportPipeline};

/// Load the layout (user file or bundled) and resolve it against `data`.
pub(super) fn load_layout(data: &Path, layout: Option<&Path>) -> anyhow::Result<DataLayout> {
    if !data.is_dir() {
        anyhow::bail!("Data directory not found: {}", data.display());
    }
    let layout = match layout {
        Some(path) => DataLayout::load(path)
            .with_context(|| format!("Failed to load data layout {}", path.display()))?,
        None => DataLayout::bundled()?,
    };
    Ok(layout.resolve(data))
}

pub fn execute(data: &Path, out: &Path, layout: Option<&Path>, quiet: bool) -> anyhow::Result<()> {
    let start = Instant::now();
    let layout = load_layout(data, layout)?;

    if !quiet {
        print_step(1, 4, LOOKING_GLASS, "Loading localization...");
    }
    let localized = ExportPipeline::new(layout).localize()?;
    if !quiet {
        print_detail(&format!("{} strings", localized.strings().len()));
        print_step(2, 4, GEAR, "Extracting items...");
    }

    let extracted = localized.extract_items()?;
    if !quiet {
        print_detail(&format!("{} items", extracted.database().len()));
        print_step(3, 4, LINK, "Merging building info...");
    }

    let output = extracted.merge_buildings()?;
    if !quiet {
        print_detail(&format!(
            "{} buildings, {} unresolved",
            output.stats.buildings,
            output.stats.unresolved.len()
        ));
        print_step(4, 4, DISK, &format!("Writing {}...", out.display()));
    }

    output
        .database
        .write_to_file(out)
        .with_context(|| format!("Failed to write item database {}", out.display()))?;

    if !quiet {
        print_done(start.elapsed());
    }
    Ok(())
}
