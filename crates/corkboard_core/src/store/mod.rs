//! Board state engine.
//!
//! # Responsibility
//! - Own the board aggregate (items, connections, categories, background).
//! - Expose the only sanctioned mutation surface for that aggregate.
//! - Restore from and write through to a durable slot.
//!
//! # Invariants
//! - Operations on unknown ids are silent no-ops.
//! - Every operation that changes board contents ends with a slot write;
//!   a failing write is logged and never rolls back memory state.
//! - Restoring from a missing or corrupt slot yields a usable default board.

use crate::model::snapshot::SnapshotError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod board_store;
mod connect;

pub use board_store::BoardStore;
pub use connect::ConnectState;

/// Errors surfaced by store entry points that accept external input.
#[derive(Debug)]
pub enum BoardError {
    /// Imported text is not a readable board blob.
    Snapshot(SnapshotError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snapshot(err) => write!(f, "board import rejected: {err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Snapshot(err) => Some(err),
        }
    }
}

impl From<SnapshotError> for BoardError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}
