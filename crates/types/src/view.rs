//! Read-model types returned by queries.
//!
//! These are snapshots for external consumers; claims are intentionally
//! not exposed here (owner and color are the observable cell state).

use crate::UserId;
use serde::{Deserialize, Serialize};

/// Owner and color of one cell, in scanline order within [`CanvasView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Identity that painted the cell, if any.
    pub owner: Option<UserId>,

    /// Palette index of the cell's color.
    pub color_index: u32,
}

/// Full canvas snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasView {
    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// All palette color names in index order.
    pub palette: Vec<String>,

    /// Every cell in scanline order (`width * height` entries).
    pub cells: Vec<CellView>,
}

/// One entry of a caller's painted history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintedPixel {
    /// Scanline index the caller painted.
    pub index: u32,

    /// The cell's *current* color index (0 again after an admin clear).
    pub color_index: u32,
}

/// A caller's selected palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedColor {
    /// Selected palette index.
    pub index: u32,

    /// Name of that palette entry.
    pub name: String,
}

/// Summary statistics for the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasInfo {
    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Number of cells with an owner, computed by full scan.
    pub painted_cells: u32,

    /// Number of palette colors.
    pub palette_size: u32,

    /// Current cursor value.
    pub next_index: u32,
}
