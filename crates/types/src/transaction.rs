//! Inbound transaction types.

use serde::{Deserialize, Serialize};

/// State transitions the Transaction Dispatcher can deliver.
///
/// The dispatcher authenticates the caller and supplies the current time;
/// both arrive alongside the transaction, not inside it. Transitions are
/// applied one at a time, atomically: a validation failure commits
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasTransaction {
    /// One-time canvas creation (admin-only).
    Initialize,

    /// Paint the next available cell with the caller's selected color.
    Paint,

    /// Advance the caller's selected color, wrapping at palette length.
    CycleColor,

    /// Reserve the next available cell without painting it.
    ClaimPixel,

    /// Reset all cell contents and the cursor (admin-only).
    AdminClearCanvas,

    /// Permanently disable all further mutation (admin-only).
    AdminFinalize,

    /// Append one auto-named palette color (admin-only).
    AdminAddPaletteColor,
}

impl CanvasTransaction {
    /// Get a human-readable name for this transaction type.
    pub fn type_name(&self) -> &'static str {
        match self {
            CanvasTransaction::Initialize => "Initialize",
            CanvasTransaction::Paint => "Paint",
            CanvasTransaction::CycleColor => "CycleColor",
            CanvasTransaction::ClaimPixel => "ClaimPixel",
            CanvasTransaction::AdminClearCanvas => "AdminClearCanvas",
            CanvasTransaction::AdminFinalize => "AdminFinalize",
            CanvasTransaction::AdminAddPaletteColor => "AdminAddPaletteColor",
        }
    }

    /// Check if this transaction requires the admin identity.
    pub fn is_admin_only(&self) -> bool {
        matches!(
            self,
            CanvasTransaction::Initialize
                | CanvasTransaction::AdminClearCanvas
                | CanvasTransaction::AdminFinalize
                | CanvasTransaction::AdminAddPaletteColor
        )
    }
}
