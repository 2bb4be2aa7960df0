//! The gridplace canvas state machine.
//!
//! A shared, append-only pixel grid with multi-party access and
//! administrative lifecycle control. All state lives in
//! [`CanvasStateMachine`], which is:
//!
//! - **Synchronous**: no async, no I/O, no internal clocks — the host
//!   dispatcher supplies the caller identity and the current time
//! - **Deterministic**: same state + transaction = same result
//! - **Transactional**: every transition validates completely before its
//!   first mutation, so a failure commits nothing
//!
//! The dispatcher applies one transaction at a time and broadcasts the
//! returned [`CanvasEvent`](gridplace_types::CanvasEvent)s to observers.

mod config;
mod state;
mod user;

pub use config::CanvasConfig;
pub use state::CanvasStateMachine;
