//! Durable key-value slot contract and implementations.
//!
//! # Responsibility
//! - Define the read/write contract the board store persists through.
//! - Provide an in-process slot and a SQLite-backed slot.
//!
//! # Invariants
//! - A slot stores opaque string blobs; it never inspects their contents.
//! - Reading a key that was never written yields `Ok(None)`, not an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemorySlot;
pub use sqlite::SqliteSlot;

/// Key under which the whole board is stored. One board per process.
pub const STORAGE_KEY: &str = "corkboard-state";

pub type SlotResult<T> = Result<T, SlotError>;

/// Failure reading from or writing to a slot.
#[derive(Debug)]
pub enum SlotError {
    Db(DbError),
    /// Write rejected because the blob exceeds the slot capacity.
    QuotaExceeded {
        key: String,
        size: usize,
        capacity: usize,
    },
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::QuotaExceeded {
                key,
                size,
                capacity,
            } => write!(
                f,
                "slot `{key}` quota exceeded: {size} bytes > capacity {capacity}"
            ),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<DbError> for SlotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous blob storage addressed by key.
pub trait BoardSlot {
    fn read(&self, key: &str) -> SlotResult<Option<String>>;
    fn write(&mut self, key: &str, blob: &str) -> SlotResult<()>;
}
