//! Serialized board blob.
//!
//! # Responsibility
//! - Define the JSON shape written to and read from the durable slot.
//! - Decode blobs with the item/background defaulting rules applied.
//!
//! # Invariants
//! - `categories`/`background` are optional on decode so partial imports
//!   and older blobs (items and connections only) remain readable.
//! - Encoding always writes all four keys.

use crate::model::background::Background;
use crate::model::category::Category;
use crate::model::connection::Connection;
use crate::model::item::Item;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Blob decode/encode failure.
#[derive(Debug)]
pub enum SnapshotError {
    Json(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid board blob: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Full or partial board contents as stored in the slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
}

impl BoardSnapshot {
    /// Parses a blob. A JSON `null` decodes to an empty snapshot.
    pub fn from_json(blob: &str) -> SnapshotResult<Self> {
        let parsed: Option<Self> = serde_json::from_str(blob)?;
        Ok(parsed.unwrap_or_default())
    }

    pub fn to_json(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Stacking counter implied by the items: highest `z_index`, never below 0.
    pub fn max_z_index(&self) -> i64 {
        self.items.iter().map(|item| item.z_index).fold(0, i64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::BoardSnapshot;

    #[test]
    fn null_blob_decodes_to_empty_snapshot() {
        let snapshot = BoardSnapshot::from_json("null").unwrap();
        assert!(snapshot.items.is_empty());
        assert!(snapshot.categories.is_none());
    }

    #[test]
    fn max_z_index_never_goes_negative() {
        let snapshot = BoardSnapshot::from_json(
            r#"{"items":[{"id":"a","x":0,"y":0,"zIndex":-4}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.max_z_index(), 0);
    }

    #[test]
    fn truncated_blob_is_an_error() {
        assert!(BoardSnapshot::from_json(r#"{"items":[{"id":"#).is_err());
    }
}
