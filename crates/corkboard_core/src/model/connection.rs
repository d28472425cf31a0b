//! Undirected links between cards.
//!
//! # Invariants
//! - At most one connection per unordered pair of item ids.
//! - No connection has the same item at both ends.
//!
//! Both invariants are enforced by the store when a connection is created;
//! this type only describes the edge.

use crate::model::item::ItemId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ConnectionId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: ConnectionId,
    pub from_id: ItemId,
    pub to_id: ItemId,
}

impl Connection {
    /// Creates a connection with a generated id.
    pub fn new(from_id: impl Into<ItemId>, to_id: impl Into<ItemId>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            from_id: from_id.into(),
            to_id: to_id.into(),
        }
    }

    /// Whether either end is `item_id`.
    pub fn touches(&self, item_id: &str) -> bool {
        self.from_id == item_id || self.to_id == item_id
    }

    /// Whether this edge joins `a` and `b`, in either direction.
    pub fn joins(&self, a: &str, b: &str) -> bool {
        (self.from_id == a && self.to_id == b) || (self.from_id == b && self.to_id == a)
    }

    /// The opposite end from `item_id`, if this edge touches it.
    pub fn other_end(&self, item_id: &str) -> Option<&str> {
        if self.from_id == item_id {
            Some(self.to_id.as_str())
        } else if self.to_id == item_id {
            Some(self.from_id.as_str())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Connection;

    #[test]
    fn joins_ignores_direction() {
        let connection = Connection::new("a", "b");
        assert!(connection.joins("a", "b"));
        assert!(connection.joins("b", "a"));
        assert!(!connection.joins("a", "c"));
    }

    #[test]
    fn other_end_resolves_both_sides() {
        let connection = Connection::new("a", "b");
        assert_eq!(connection.other_end("a"), Some("b"));
        assert_eq!(connection.other_end("b"), Some("a"));
        assert_eq!(connection.other_end("c"), None);
    }
}
