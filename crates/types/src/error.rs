//! Error taxonomy for canvas transitions.

use std::time::Duration;
use thiserror::Error;

/// Errors returned by canvas transitions and queries.
///
/// Any failure aborts the whole transition with zero state change; the
/// all-or-nothing contract means retry is a caller-level decision (wait
/// out a cooldown, try again after claimed cells are vacated).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// A non-admin identity invoked an admin-only operation.
    #[error("caller is not the admin")]
    Unauthorized,

    /// The canvas has not been initialized yet.
    #[error("canvas is not initialized")]
    NotInitialized,

    /// `initialize` was called a second time.
    #[error("canvas is already initialized")]
    AlreadyInitialized,

    /// A mutating call was made on a finalized canvas.
    #[error("canvas is finalized")]
    Finalized,

    /// No unpainted capacity remains from the cursor onward.
    #[error("canvas is full")]
    CanvasFull,

    /// The caller painted too recently.
    #[error("cooldown active: {remaining:?} remaining")]
    CooldownActive {
        /// Time left until the caller may paint again.
        remaining: Duration,
    },

    /// Every cell from the scan point is claimed by other identities.
    ///
    /// Transient, unlike `CanvasFull`: the claimers can still paint or
    /// the claims become reachable again after an admin clear.
    #[error("no available cell: remaining cells are claimed by others")]
    NoAvailableCell,

    /// The palette has no colors. Unreachable after initialization.
    #[error("palette is empty")]
    EmptyPalette,
}
