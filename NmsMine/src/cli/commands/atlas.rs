//! CLI command for packing the icon atlas

use std::path::Path;
use std::time::Instant;

use anyhow::Context;

use crate::atlas::pack_atlas_with_progress;
use crate::cli::progress::{DISK, LOOKING_GLASS, PICTURE, print_detail, print_done, print_step, simple_bar};
use crate::items::load_item_db;

pub fn execute(
    data: &Path,
    assets: &Path,
    image: &Path,
    map: &Path,
    width: u32,
    quiet: bool,
) -> anyhow::Result<()> {
    let start = Instant::now();

    if !quiet {
        print_step(1, 3, LOOKING_GLASS, "Reading item database...");
    }
    let db = load_item_db(data)
        .with_context(|| format!("Failed to load item database {}", data.display()))?;
    if db.icon_ids().is_empty() {
        anyhow::bail!("No item in {} references an icon", data.display());
    }

    if !quiet {
        print_step(2, 3, PICTURE, "Packing icons...");
    }
    let bar = (!quiet).then(|| simple_bar(0, "Packing"));
    let output = pack_atlas_with_progress(&db, assets, width, &|current, total, _icon| {
        if let Some(bar) = &bar {
            bar.set_length(total as u64);
            bar.set_position(current as u64);
        }
    })?;
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    if !quiet {
        print_detail(&format!(
            "{} icons, {} skipped, {}x{} px",
            output.map.len(),
            output.skipped.len(),
            output.image.width(),
            output.image.height()
        ));
        print_step(3, 3, DISK, "Writing atlas...");
    }
    output.write_image(image)?;
    output.write_map(map)?;

    if !quiet {
        print_done(start.elapsed());
    }
    Ok(())
}
