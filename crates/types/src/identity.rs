//! Identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An authenticated caller identity, assigned by the host environment.
///
/// The core never mints these itself; the Transaction Dispatcher
/// authenticates callers and hands their identity in with each
/// transaction. Exactly one identity (fixed at machine construction) is
/// the admin.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User({})", self.0)
    }
}
