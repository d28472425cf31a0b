//! SQLite-backed slot over the `kv_slots` table.
//!
//! # Invariants
//! - The connection must come from `db::open_db*` so `kv_slots` exists.
//! - A write replaces the whole blob for its key in one statement.

use super::{BoardSlot, SlotResult};
use rusqlite::{params, Connection, OptionalExtension};

pub struct SqliteSlot<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlot<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BoardSlot for SqliteSlot<'_> {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        let blob = self
            .conn
            .query_row(
                "SELECT blob FROM kv_slots WHERE slot_key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(blob)
    }

    fn write(&mut self, key: &str, blob: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (slot_key, blob)
             VALUES (?1, ?2)
             ON CONFLICT(slot_key) DO UPDATE SET
                blob = excluded.blob,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, blob],
        )?;
        Ok(())
    }
}
