//! SQLite file that backs `SqliteSlot`.
//!
//! # Responsibility
//! - Open board database files and bring the `kv_slots` schema up to date.
//! - Refuse files whose schema this build cannot serve slots from.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - A returned connection always has a `kv_slots` table.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// Table holding one blob per slot key.
pub const SLOT_TABLE: &str = "kv_slots";

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// File was written by a newer build.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Schema version claims to be current but the slot table is absent,
    /// as with a database created by some other program.
    MissingSlotTable { db_version: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "board database error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "board database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::MissingSlotTable { db_version } => write!(
                f,
                "not a board database: schema version {db_version} but no `{SLOT_TABLE}` table"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::MissingSlotTable { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
