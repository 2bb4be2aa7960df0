//! The shared color palette.

use serde::{Deserialize, Serialize};

/// Palette index reserved for the "empty" sentinel color.
pub const SENTINEL_COLOR_INDEX: u32 = 0;

/// Default palette seeded by `initialize`, in index order.
///
/// Index 0 is the transparent sentinel that unpainted cells reference.
pub const DEFAULT_PALETTE: &[&str] = &[
    "transparent",
    "white",
    "black",
    "red",
    "green",
    "blue",
    "yellow",
    "purple",
    "orange",
];

/// Append-only ordered list of named colors referenced by index.
///
/// Indices are stable forever: entries are never removed or reordered.
/// Admin-added colors get a deterministic `color#<index>` name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    names: Vec<String>,
}

impl Default for Palette {
    /// An empty palette, the state before `initialize` seeds it.
    fn default() -> Self {
        Self { names: Vec::new() }
    }
}

impl Palette {
    /// The default palette, sentinel first.
    pub fn seeded() -> Self {
        Self {
            names: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the color at `index`, if in range.
    pub fn name(&self, index: u32) -> Option<&str> {
        self.names.get(index as usize).map(String::as_str)
    }

    /// All color names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Append one auto-named color and return its index.
    pub fn push_generated(&mut self) -> u32 {
        let index = self.names.len() as u32;
        self.names.push(format!("color#{index}"));
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_palette_has_sentinel_first() {
        let palette = Palette::seeded();
        assert!(palette.len() >= 1);
        assert_eq!(palette.name(SENTINEL_COLOR_INDEX), Some("transparent"));
    }

    #[test]
    fn test_push_generated_appends_stable_names() {
        let mut palette = Palette::seeded();
        let before = palette.len() as u32;

        let first = palette.push_generated();
        let second = palette.push_generated();

        assert_eq!(first, before);
        assert_eq!(second, before + 1);
        assert_eq!(palette.name(first), Some(format!("color#{first}").as_str()));
        // Existing entries untouched
        assert_eq!(palette.name(0), Some("transparent"));
    }
}
