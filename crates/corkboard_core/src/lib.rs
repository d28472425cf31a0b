//! Board state engine for Corkboard.
//! This crate is the single source of truth for board invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod slot;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::background::{Background, BackgroundKind, BackgroundPatch};
pub use model::category::{default_categories, Category, CategoryId, CategoryPatch};
pub use model::connection::{Connection, ConnectionId};
pub use model::item::{Item, ItemId, ItemPatch, DEFAULT_ITEM_WIDTH};
pub use model::snapshot::{BoardSnapshot, SnapshotError};
pub use slot::{BoardSlot, MemorySlot, SlotError, SlotResult, SqliteSlot, STORAGE_KEY};
pub use store::{BoardError, BoardStore, ConnectState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
