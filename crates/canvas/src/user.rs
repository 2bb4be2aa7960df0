//! Per-identity state.

use std::time::Duration;

/// State tracked for each identity, created lazily on first interaction.
///
/// The painted history is a permanent personal ledger: it only grows, and
/// an admin clear does not touch it.
#[derive(Debug, Clone, Default)]
pub(crate) struct UserState {
    /// Currently selected palette index (sentinel 0 until cycled).
    pub selected_color_index: u32,

    /// Indices this identity painted, in paint order. Append-only.
    pub painted: Vec<u32>,

    /// Time of the most recent successful paint (`None` = never).
    pub last_paint: Option<Duration>,
}
