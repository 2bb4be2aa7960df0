//! Outbound notification events.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// Notifications broadcast to external observers (UIs, indexers).
///
/// Transitions return these for the dispatcher to deliver in order; the
/// core never reads them back. Every variant is tagged with the acting
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasEvent {
    /// The canvas was created.
    Initialized {
        /// Admin who performed initialization.
        admin: UserId,
        /// Grid width in cells.
        width: u32,
        /// Grid height in cells.
        height: u32,
        /// Number of colors in the seeded palette.
        palette_size: u32,
    },

    /// A cell was painted.
    Paint {
        /// Identity that painted.
        painter: UserId,
        /// Scanline index of the painted cell.
        pixel_index: u32,
        /// Palette index the cell was painted with.
        color_index: u32,
    },

    /// A user's selected color changed.
    ColorCycled {
        /// Identity whose selection changed.
        user: UserId,
        /// The new selected palette index.
        new_color_index: u32,
    },

    /// A cell was reserved.
    PixelClaimed {
        /// Identity holding the claim.
        claimer: UserId,
        /// Scanline index of the claimed cell.
        pixel_index: u32,
    },

    /// All cell contents and the cursor were reset.
    CanvasCleared {
        /// Admin who cleared.
        admin: UserId,
    },

    /// The canvas was permanently locked.
    Finalized {
        /// Admin who finalized.
        admin: UserId,
    },
}

impl CanvasEvent {
    /// Get a human-readable name for this event type.
    pub fn type_name(&self) -> &'static str {
        match self {
            CanvasEvent::Initialized { .. } => "Initialized",
            CanvasEvent::Paint { .. } => "Paint",
            CanvasEvent::ColorCycled { .. } => "ColorCycled",
            CanvasEvent::PixelClaimed { .. } => "PixelClaimed",
            CanvasEvent::CanvasCleared { .. } => "CanvasCleared",
            CanvasEvent::Finalized { .. } => "Finalized",
        }
    }

    /// The identity that caused this event.
    pub fn actor(&self) -> UserId {
        match self {
            CanvasEvent::Initialized { admin, .. } => *admin,
            CanvasEvent::Paint { painter, .. } => *painter,
            CanvasEvent::ColorCycled { user, .. } => *user,
            CanvasEvent::PixelClaimed { claimer, .. } => *claimer,
            CanvasEvent::CanvasCleared { admin } => *admin,
            CanvasEvent::Finalized { admin } => *admin,
        }
    }
}
