//! Shared types for the gridplace canvas.
//!
//! Everything here is plain data: identifiers, grid cells, the palette,
//! the transaction and notification enums, the error taxonomy, and the
//! read-model structs returned by queries. The state machine itself lives
//! in `gridplace-canvas`.

mod cell;
mod error;
mod event;
mod identity;
mod palette;
mod transaction;
mod view;

pub use cell::Cell;
pub use error::CanvasError;
pub use event::CanvasEvent;
pub use identity::UserId;
pub use palette::{Palette, DEFAULT_PALETTE, SENTINEL_COLOR_INDEX};
pub use transaction::CanvasTransaction;
pub use view::{CanvasInfo, CanvasView, CellView, PaintedPixel, SelectedColor};
