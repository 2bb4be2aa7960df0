//! The canvas state machine.
//!
//! Lifecycle: `Uninitialized → Active → Finalized`, both edges one-way.
//! Transitions mutate `self` and return the notification events for the
//! dispatcher to broadcast; queries borrow `self` and mutate nothing.
//!
//! Every transition validates completely before its first write, so any
//! error leaves the state untouched (the host's all-or-nothing
//! transaction contract).

use crate::config::CanvasConfig;
use crate::user::UserState;
use gridplace_types::{
    CanvasError, CanvasEvent, CanvasInfo, CanvasTransaction, CanvasView, Cell, CellView,
    PaintedPixel, Palette, SelectedColor, UserId, SENTINEL_COLOR_INDEX,
};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

/// The authoritative canvas state.
///
/// One instance per deployment, owned by the Transaction Dispatcher,
/// which serializes all access. The admin identity is fixed at
/// construction (the deployer) and never transferable.
pub struct CanvasStateMachine {
    /// The single privileged identity.
    admin: UserId,

    /// Dimensions and cooldown, fixed at construction.
    config: CanvasConfig,

    /// One-way flag set by `initialize`.
    initialized: bool,

    /// One-way flag set by `admin_finalize`. Terminal.
    finalized: bool,

    /// `width * height`, computed at initialization.
    total_cells: u32,

    /// Cursor to the lowest-index cell considered next in line.
    ///
    /// Non-decreasing between admin clears, never above `total_cells`.
    next_index: u32,

    /// All cells in scanline order. Empty until initialized.
    cells: Vec<Cell>,

    /// Append-only color list, seeded by `initialize`.
    palette: Palette,

    /// Per-identity state, created lazily on first interaction.
    ///
    /// Never iterated: personal ledgers outlive admin clears, so there
    /// is deliberately no bulk reset path through this map.
    users: HashMap<UserId, UserState>,
}

impl CanvasStateMachine {
    /// Create an uninitialized machine owned by `admin`.
    pub fn new(admin: UserId, config: CanvasConfig) -> Self {
        Self {
            admin,
            config,
            initialized: false,
            finalized: false,
            total_cells: 0,
            next_index: 0,
            cells: Vec::new(),
            palette: Palette::default(),
            users: HashMap::new(),
        }
    }

    /// The privileged identity.
    pub fn admin(&self) -> UserId {
        self.admin
    }

    /// Whether `initialize` has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the canvas is permanently locked.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Current cursor value.
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    /// Total cell count (0 until initialized).
    pub fn total_cells(&self) -> u32 {
        self.total_cells
    }

    /// Borrow the cell at `index`, if initialized and in range.
    pub fn cell(&self, index: u32) -> Option<&Cell> {
        self.cells.get(index as usize)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Dispatch
    // ═══════════════════════════════════════════════════════════════════

    /// Apply one transaction on behalf of `caller` at time `now`.
    ///
    /// `now` comes from the host clock and must be non-decreasing across
    /// calls. Returns the notifications to broadcast, in order. On error
    /// no state was changed.
    pub fn apply(
        &mut self,
        caller: UserId,
        now: Duration,
        tx: CanvasTransaction,
    ) -> Result<Vec<CanvasEvent>, CanvasError> {
        debug!(%caller, tx = tx.type_name(), "applying transaction");

        match tx {
            CanvasTransaction::Initialize => self.initialize(caller).map(|e| vec![e]),
            CanvasTransaction::Paint => self.paint(caller, now).map(|e| vec![e]),
            CanvasTransaction::CycleColor => self.cycle_color(caller).map(|e| vec![e]),
            CanvasTransaction::ClaimPixel => self.claim_pixel(caller).map(|e| vec![e]),
            CanvasTransaction::AdminClearCanvas => self.admin_clear_canvas(caller).map(|e| vec![e]),
            CanvasTransaction::AdminFinalize => self.admin_finalize(caller).map(|e| vec![e]),
            // Palette extension has no notification in the observer
            // protocol.
            CanvasTransaction::AdminAddPaletteColor => {
                self.admin_add_palette_color(caller).map(|_| vec![])
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Transitions
    // ═══════════════════════════════════════════════════════════════════

    /// One-time canvas creation. Admin-only.
    pub fn initialize(&mut self, caller: UserId) -> Result<CanvasEvent, CanvasError> {
        self.ensure_admin(caller)?;
        if self.initialized {
            return Err(CanvasError::AlreadyInitialized);
        }

        self.total_cells = self.config.total_cells();
        self.cells = vec![Cell::empty(); self.total_cells as usize];
        self.palette = Palette::seeded();
        self.next_index = 0;
        self.initialized = true;

        info!(
            %caller,
            width = self.config.width,
            height = self.config.height,
            palette_size = self.palette.len(),
            "canvas initialized"
        );

        Ok(CanvasEvent::Initialized {
            admin: caller,
            width: self.config.width,
            height: self.config.height,
            palette_size: self.palette.len() as u32,
        })
    }

    /// Paint the next available cell with the caller's selected color.
    pub fn paint(&mut self, caller: UserId, now: Duration) -> Result<CanvasEvent, CanvasError> {
        self.ensure_active()?;

        if self.next_index >= self.total_cells {
            return Err(CanvasError::CanvasFull);
        }

        if let Some(last) = self.users.get(&caller).and_then(|u| u.last_paint) {
            let ready_at = last + self.config.cooldown;
            if now < ready_at {
                return Err(CanvasError::CooldownActive {
                    remaining: ready_at - now,
                });
            }
        }

        let idx = self
            .scan_available(caller)
            .ok_or(CanvasError::NoAvailableCell)?;

        // Validation complete; all writes below commit together.
        let user = self.users.entry(caller).or_default();
        let color_index = user.selected_color_index;
        user.painted.push(idx);
        user.last_paint = Some(now);

        let cell = &mut self.cells[idx as usize];
        debug_assert!(!cell.is_painted(), "scan landed on a painted cell");
        cell.owner = Some(caller);
        cell.color_index = color_index;
        cell.claimed = None;

        self.advance_cursor(idx + 1);

        debug!(%caller, index = idx, color = color_index, "cell painted");

        Ok(CanvasEvent::Paint {
            painter: caller,
            pixel_index: idx,
            color_index,
        })
    }

    /// Advance the caller's selected color, wrapping at palette length.
    pub fn cycle_color(&mut self, caller: UserId) -> Result<CanvasEvent, CanvasError> {
        self.ensure_active()?;

        let palette_len = self.palette.len() as u32;
        if palette_len == 0 {
            return Err(CanvasError::EmptyPalette);
        }

        let user = self.users.entry(caller).or_default();
        user.selected_color_index = (user.selected_color_index + 1) % palette_len;
        let new_color_index = user.selected_color_index;

        debug!(%caller, color = new_color_index, "color cycled");

        Ok(CanvasEvent::ColorCycled {
            user: caller,
            new_color_index,
        })
    }

    /// Reserve the next available cell for the caller without painting.
    ///
    /// The claim blocks other identities' scans from landing on the cell
    /// but leaves it unpainted and does not move the cursor.
    pub fn claim_pixel(&mut self, caller: UserId) -> Result<CanvasEvent, CanvasError> {
        self.ensure_active()?;

        if self.next_index >= self.total_cells {
            return Err(CanvasError::CanvasFull);
        }

        let idx = self
            .scan_available(caller)
            .ok_or(CanvasError::NoAvailableCell)?;

        self.cells[idx as usize].claimed = Some(caller);

        debug!(%caller, index = idx, "cell claimed");

        Ok(CanvasEvent::PixelClaimed {
            claimer: caller,
            pixel_index: idx,
        })
    }

    /// Reset every cell and the cursor. Admin-only.
    ///
    /// Per-user histories and selected colors are untouched: the painted
    /// ledger is personal and survives canvas resets.
    pub fn admin_clear_canvas(&mut self, caller: UserId) -> Result<CanvasEvent, CanvasError> {
        self.ensure_admin(caller)?;
        self.ensure_active()?;

        for cell in &mut self.cells {
            *cell = Cell::empty();
        }
        self.next_index = 0;

        info!(%caller, "canvas cleared");

        Ok(CanvasEvent::CanvasCleared { admin: caller })
    }

    /// Permanently lock the canvas. Admin-only, terminal.
    pub fn admin_finalize(&mut self, caller: UserId) -> Result<CanvasEvent, CanvasError> {
        self.ensure_admin(caller)?;
        self.ensure_initialized()?;
        if self.finalized {
            return Err(CanvasError::Finalized);
        }

        self.finalized = true;

        info!(%caller, "canvas finalized");

        Ok(CanvasEvent::Finalized { admin: caller })
    }

    /// Append one auto-named palette color and return its index.
    /// Admin-only.
    pub fn admin_add_palette_color(&mut self, caller: UserId) -> Result<u32, CanvasError> {
        self.ensure_admin(caller)?;
        self.ensure_active()?;

        let index = self.palette.push_generated();

        debug!(%caller, index, "palette color added");

        Ok(index)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════

    /// Full snapshot: dimensions, palette, and every cell in scanline
    /// order.
    pub fn get_canvas(&self) -> Result<CanvasView, CanvasError> {
        self.ensure_initialized()?;

        Ok(CanvasView {
            width: self.config.width,
            height: self.config.height,
            palette: self.palette.names().to_vec(),
            cells: self
                .cells
                .iter()
                .map(|cell| CellView {
                    owner: cell.owner,
                    color_index: cell.color_index,
                })
                .collect(),
        })
    }

    /// The caller's painted history, each entry paired with the cell's
    /// current color (which an admin clear resets to the sentinel).
    pub fn get_my_pixels(&self, caller: UserId) -> Result<Vec<PaintedPixel>, CanvasError> {
        self.ensure_initialized()?;

        let painted = self
            .users
            .get(&caller)
            .map(|user| user.painted.as_slice())
            .unwrap_or(&[]);

        Ok(painted
            .iter()
            .map(|&index| PaintedPixel {
                index,
                color_index: self.cells[index as usize].color_index,
            })
            .collect())
    }

    /// The caller's selected palette index and its name.
    pub fn my_selected_color(&self, caller: UserId) -> Result<SelectedColor, CanvasError> {
        self.ensure_initialized()?;

        let index = self
            .users
            .get(&caller)
            .map(|user| user.selected_color_index)
            .unwrap_or(SENTINEL_COLOR_INDEX);
        let name = self
            .palette
            .name(index)
            .ok_or(CanvasError::EmptyPalette)?
            .to_string();

        Ok(SelectedColor { index, name })
    }

    /// Summary statistics, including the painted count by full scan.
    pub fn canvas_info(&self) -> Result<CanvasInfo, CanvasError> {
        self.ensure_initialized()?;

        let painted_cells = self.cells.iter().filter(|cell| cell.is_painted()).count() as u32;

        Ok(CanvasInfo {
            width: self.config.width,
            height: self.config.height,
            painted_cells,
            palette_size: self.palette.len() as u32,
            next_index: self.next_index,
        })
    }

    // ═══════════════════════════════════════════════════════════════════
    // Internals
    // ═══════════════════════════════════════════════════════════════════

    /// Authorization check, performed before any lifecycle check so a
    /// non-admin probe learns nothing about canvas state.
    fn ensure_admin(&self, caller: UserId) -> Result<(), CanvasError> {
        if caller != self.admin {
            return Err(CanvasError::Unauthorized);
        }
        Ok(())
    }

    fn ensure_initialized(&self) -> Result<(), CanvasError> {
        if !self.initialized {
            return Err(CanvasError::NotInitialized);
        }
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), CanvasError> {
        self.ensure_initialized()?;
        if self.finalized {
            return Err(CanvasError::Finalized);
        }
        Ok(())
    }

    /// First index from the cursor that `caller` may land on: unclaimed
    /// cells and the caller's own claims qualify; other identities'
    /// claims are skipped.
    fn scan_available(&self, caller: UserId) -> Option<u32> {
        (self.next_index..self.total_cells)
            .find(|&idx| self.cells[idx as usize].available_to(caller))
    }

    /// Move the cursor to the first unpainted index at or after `from`.
    ///
    /// Skips painted cells only. A claimed-but-unpainted cell is NOT
    /// skipped: it becomes the next cursor target, reachable by its
    /// claimer and blocking everyone else.
    fn advance_cursor(&mut self, from: u32) {
        let mut idx = from;
        while idx < self.total_cells && self.cells[idx as usize].is_painted() {
            idx += 1;
        }
        self.next_index = idx;
        debug_assert!(self.next_index <= self.total_cells);
    }
}
