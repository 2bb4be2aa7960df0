//! Grid cell state.

use crate::{UserId, SENTINEL_COLOR_INDEX};
use serde::{Deserialize, Serialize};

/// One addressable unit of the grid, identified by its scanline index.
///
/// A cell with an owner is *painted* and never changes again except
/// through an admin clear. The claim records the claiming identity
/// because the scan rules treat claimed-by-self and claimed-by-other
/// differently; painting a cell always clears its claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Identity that painted this cell, or `None` if unpainted.
    pub owner: Option<UserId>,

    /// Palette index of the painted color (sentinel 0 while unpainted).
    pub color_index: u32,

    /// Identity holding a claim on this cell, if any.
    ///
    /// A claim blocks other identities' scans from landing here, but
    /// not the claimer's own. `Some(_)` with `owner == None` means
    /// reserved-but-unpainted.
    pub claimed: Option<UserId>,
}

impl Cell {
    /// An unowned, unclaimed cell with the sentinel color.
    pub fn empty() -> Self {
        Self {
            owner: None,
            color_index: SENTINEL_COLOR_INDEX,
            claimed: None,
        }
    }

    /// Whether this cell has been painted.
    pub fn is_painted(&self) -> bool {
        self.owner.is_some()
    }

    /// Whether `caller` may land on this cell during a scan.
    ///
    /// True if the cell is unclaimed or the claim is the caller's own.
    pub fn available_to(&self, caller: UserId) -> bool {
        match self.claimed {
            None => true,
            Some(claimer) => claimer == caller,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell_is_unpainted_and_available() {
        let cell = Cell::empty();
        assert!(!cell.is_painted());
        assert!(cell.available_to(UserId(1)));
        assert!(cell.available_to(UserId(2)));
    }

    #[test]
    fn test_claimed_cell_blocks_only_others() {
        let cell = Cell {
            claimed: Some(UserId(7)),
            ..Cell::empty()
        };
        assert!(cell.available_to(UserId(7)));
        assert!(!cell.available_to(UserId(8)));
    }
}
