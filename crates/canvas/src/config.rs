//! Configuration for the canvas state machine.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration fixed at machine construction.
///
/// Dimensions take effect when `initialize` runs; they cannot change
/// afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Minimum time between two paints by the same identity.
    pub cooldown: Duration,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            // Reference deployment dimensions.
            width: 16,
            height: 16,
            cooldown: Duration::from_secs(30),
        }
    }
}

impl CanvasConfig {
    /// Create a config with custom dimensions, ensuring both are at least 1.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            ..Default::default()
        }
    }

    /// Replace the paint cooldown.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Total cell count for these dimensions.
    pub fn total_cells(&self) -> u32 {
        self.width * self.height
    }
}
