//! Icon loading and atlas composition

use super::layout::{AtlasLayout, AtlasMap};
use crate::error::{Error, Result};
use crate::items::ItemDatabase;
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Progress callback: `(current, total, icon)`.
pub type AtlasProgressCallback<'a> = &'a dyn Fn(usize, usize, &str);

/// File extension of icon sources in the asset directory.
const ICON_EXTENSION: &str = "png";

/// An icon that could not be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedIcon {
    pub icon: String,
    pub path: PathBuf,
    pub reason: String,
}

/// A packed atlas image with its cell map.
#[derive(Debug, Clone)]
pub struct AtlasOutput {
    pub image: RgbaImage,
    pub map: AtlasMap,
    /// Icons whose cell was left blank.
    pub skipped: Vec<SkippedIcon>,
}

impl AtlasOutput {
    /// Save the atlas image as PNG.
    ///
    /// # Errors
    /// Returns an error if the image cannot be encoded or written.
    pub fn write_image<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| Error::AtlasImageWrite {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::info!(
            "Wrote {}x{} atlas to {}",
            self.image.width(),
            self.image.height(),
            path.display()
        );
        Ok(())
    }

    /// Write the cell map as indented JSON.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn write_map<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.map)?;
        fs::write(path, json).map_err(|e| Error::write(path, e))?;
        tracing::info!("Wrote {} atlas cells to {}", self.map.len(), path.display());
        Ok(())
    }
}

/// Pack every distinct icon referenced by `db` into one atlas.
///
/// # Errors
/// Returns an error only for an unusable cell width or canvas size. Icons
/// that fail to load are reported in [`AtlasOutput::skipped`].
pub fn pack_atlas(db: &ItemDatabase, asset_dir: &Path, cell_width: u32) -> Result<AtlasOutput> {
    pack_atlas_with_progress(db, asset_dir, cell_width, &|_, _, _| {})
}

/// Pack with a per-icon progress callback.
///
/// # Errors
/// See [`pack_atlas`].
pub fn pack_atlas_with_progress(
    db: &ItemDatabase,
    asset_dir: &Path,
    cell_width: u32,
    progress: AtlasProgressCallback,
) -> Result<AtlasOutput> {
    let layout = AtlasLayout::new(db.icon_ids(), cell_width)?;
    let (width, height) = layout.canvas_size();
    let mut canvas = RgbaImage::new(width, height);
    let mut skipped = Vec::new();
    let total = layout.len();

    tracing::debug!(
        "Packing {total} icons into {width}x{height} ({} per row)",
        layout.stride()
    );

    for (index, (icon, cell)) in layout.placements().enumerate() {
        progress(index + 1, total, icon);

        let path = asset_dir.join(format!("{icon}.{ICON_EXTENSION}"));
        match load_icon(&path, cell_width) {
            Ok(sprite) => {
                let (x, y) = cell.pixel_origin(cell_width);
                copy_into_cell(&mut canvas, &sprite, x, y, cell_width);
            }
            Err(reason) => {
                tracing::warn!("Can't load {}: {reason}", path.display());
                skipped.push(SkippedIcon {
                    icon: icon.to_string(),
                    path,
                    reason,
                });
            }
        }
    }

    Ok(AtlasOutput {
        image: canvas,
        map: layout.map(),
        skipped,
    })
}

/// Open an icon and scale it to `cell_width` wide, keeping its aspect ratio.
fn load_icon(path: &Path, cell_width: u32) -> std::result::Result<RgbaImage, String> {
    let mut source = image::open(path).map_err(|e| e.to_string())?.to_rgba8();
    // Rows past a square top region scale below the cell and would be clipped
    if source.height() > source.width() {
        let side = source.width();
        source = imageops::crop_imm(&source, 0, 0, side, side).to_image();
    }
    let height = scaled_height(source.width(), source.height(), cell_width);
    Ok(imageops::resize(&source, cell_width, height, FilterType::Triangle))
}

/// Height after scaling a `width` x `height` image to `cell_width` wide.
fn scaled_height(width: u32, height: u32, cell_width: u32) -> u32 {
    if width == 0 {
        return cell_width;
    }
    let scaled = (f64::from(height) * f64::from(cell_width) / f64::from(width)).round();
    (scaled as u32).max(1)
}

/// Overwrite the cell at `(x, y)` with `sprite`, clipped to the cell.
fn copy_into_cell(canvas: &mut RgbaImage, sprite: &RgbaImage, x: u32, y: u32, cell_width: u32) {
    let w = sprite.width().min(cell_width);
    let h = sprite.height().min(cell_width);
    for sy in 0..h {
        for sx in 0..w {
            canvas.put_pixel(x + sx, y + sy, *sprite.get_pixel(sx, sy));
        }
    }
}
