//! Deterministic fixtures for gridplace tests.
//!
//! Provides well-known identities and small grid dimensions so tests can
//! exercise capacity and claim edge cases without hand-rolling setup.
//! Depends only on `gridplace-types` so machine crates can pull this in
//! as a dev-dependency.

use gridplace_types::UserId;
use std::time::Duration;

/// The deploying (admin) identity used across tests.
pub const ADMIN: UserId = UserId(0);

/// A non-admin identity.
pub const ALICE: UserId = UserId(1);

/// A second non-admin identity.
pub const BOB: UserId = UserId(2);

/// A third non-admin identity.
pub const CAROL: UserId = UserId(3);

/// The reference cooldown between paints.
pub const COOLDOWN: Duration = Duration::from_secs(30);

/// A sequence of distinct non-admin identities.
pub fn users(count: u64) -> Vec<UserId> {
    (1..=count).map(UserId).collect()
}

/// Timestamps spaced a full cooldown apart, starting at `COOLDOWN`.
///
/// Feeding `ticks(n)` into successive paints from one identity keeps
/// every call outside the cooldown window.
pub fn ticks(count: u32) -> Vec<Duration> {
    (1..=count).map(|i| COOLDOWN * i).collect()
}
