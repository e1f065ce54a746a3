//! Grid placement for the icon atlas

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A cell in the atlas grid, in cells rather than pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: u32,
    pub y: u32,
}

impl GridCell {
    /// Top-left pixel of this cell for a given cell width.
    pub fn pixel_origin(self, cell_width: u32) -> (u32, u32) {
        (self.x * cell_width, self.y * cell_width)
    }
}

/// Icon id to grid cell, ordered by icon id.
pub type AtlasMap = BTreeMap<String, GridCell>;

/// Placement of a sorted icon set on a near-square grid.
///
/// With `N` icons and cell width `W`:
/// - `stride = floor(sqrt(N))` cells per row
/// - `rows = ceil(N / stride)`
/// - canvas is `(stride * W) x (rows * W)` pixels
///
/// Icon `i` in sorted order lands in cell `(i mod stride, i div stride)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasLayout {
    icons: Vec<String>,
    cell_width: u32,
    stride: u32,
    rows: u32,
}

impl AtlasLayout {
    /// Lay out a set of icon ids.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCellWidth`] for a zero cell width, or
    /// [`Error::AtlasTooLarge`] if the canvas would not fit in `u32` pixels.
    pub fn new(icons: BTreeSet<String>, cell_width: u32) -> Result<Self> {
        if cell_width == 0 {
            return Err(Error::InvalidCellWidth(cell_width));
        }

        let count = icons.len();
        let stride = count.isqrt();
        let rows = if stride == 0 { 0 } else { count.div_ceil(stride) };

        let too_large = || Error::AtlasTooLarge {
            icons: count,
            cell_width,
        };
        let stride = u32::try_from(stride).map_err(|_| too_large())?;
        let rows = u32::try_from(rows).map_err(|_| too_large())?;
        stride.checked_mul(cell_width).ok_or_else(too_large)?;
        rows.checked_mul(cell_width).ok_or_else(too_large)?;

        Ok(Self {
            icons: icons.into_iter().collect(),
            cell_width,
            stride,
            rows,
        })
    }

    /// Icon ids in placement order.
    pub fn icons(&self) -> &[String] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Cells per row.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Canvas size in pixels, `(width, height)`.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.stride * self.cell_width, self.rows * self.cell_width)
    }

    /// Grid cell of the `index`-th icon.
    pub fn cell(&self, index: usize) -> GridCell {
        let stride = self.stride as usize;
        let x = index % stride;
        let y = (index - x) / stride;
        GridCell {
            x: x as u32,
            y: y as u32,
        }
    }

    /// Iterate over `(icon, cell)` in placement order.
    pub fn placements(&self) -> impl Iterator<Item = (&str, GridCell)> {
        self.icons
            .iter()
            .enumerate()
            .map(|(index, icon)| (icon.as_str(), self.cell(index)))
    }

    /// The complete icon to cell map.
    pub fn map(&self) -> AtlasMap {
        self.placements()
            .map(|(icon, cell)| (icon.to_string(), cell))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn icon_set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| (*id).to_string()).collect()
    }

    #[test]
    fn test_three_icons_single_column() {
        let layout = AtlasLayout::new(icon_set(&["b", "a", "c"]), 32).unwrap();

        assert_eq!(layout.icons(), ["a", "b", "c"]);
        assert_eq!(layout.stride(), 1);
        assert_eq!(layout.rows(), 3);
        assert_eq!(layout.canvas_size(), (32, 96));

        let map = layout.map();
        assert_eq!(map["a"], GridCell { x: 0, y: 0 });
        assert_eq!(map["b"], GridCell { x: 0, y: 1 });
        assert_eq!(map["c"], GridCell { x: 0, y: 2 });
    }

    #[test]
    fn test_partial_last_row() {
        let ids: Vec<String> = (0..10).map(|i| format!("icon{i:02}")).collect();
        let layout = AtlasLayout::new(ids.into_iter().collect(), 16).unwrap();

        assert_eq!(layout.stride(), 3);
        assert_eq!(layout.rows(), 4);
        assert_eq!(layout.canvas_size(), (48, 64));
        assert_eq!(layout.cell(4), GridCell { x: 1, y: 1 });
        assert_eq!(layout.cell(9), GridCell { x: 0, y: 3 });
        assert_eq!(layout.cell(9).pixel_origin(16), (0, 48));
    }

    #[test]
    fn test_empty_set() {
        let layout = AtlasLayout::new(BTreeSet::new(), 32).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.stride(), 0);
        assert_eq!(layout.rows(), 0);
        assert_eq!(layout.canvas_size(), (0, 0));
        assert!(layout.map().is_empty());
    }

    #[test]
    fn test_zero_cell_width() {
        assert!(matches!(
            AtlasLayout::new(icon_set(&["a"]), 0),
            Err(Error::InvalidCellWidth(0))
        ));
    }

    #[test]
    fn test_canvas_overflow() {
        assert!(matches!(
            AtlasLayout::new(icon_set(&["a", "b"]), u32::MAX),
            Err(Error::AtlasTooLarge { icons: 2, .. })
        ));
    }

    #[test]
    fn test_map_json_shape() {
        let layout = AtlasLayout::new(icon_set(&["x", "y"]), 8).unwrap();
        let json = serde_json::to_string_pretty(&layout.map()).unwrap();
        assert_eq!(
            json,
            "{\n  \"x\": {\n    \"x\": 0,\n    \"y\": 0\n  },\n  \"y\": {\n    \"x\": 0,\n    \"y\": 1\n  }\n}"
        );
    }
}
