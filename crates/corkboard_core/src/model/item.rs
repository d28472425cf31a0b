//! Item (note card) domain model.
//!
//! # Responsibility
//! - Define the card record placed on the board canvas.
//! - Own the defaulting rules applied whenever items are decoded.
//! - Provide typed partial updates for card fields.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `z_index` is assigned by the store counter; patches cannot change it.
//! - Missing or `null` optional fields decode to the same defaults as a
//!   fresh item.

use crate::model::category::CategoryId;
use crate::model::decode::{null_as_default, null_as_item_width};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a card.
///
/// Kept as a string alias: imported boards may carry ids that are not UUIDs.
pub type ItemId = String;

/// Width assigned to new cards and to decoded cards without a width.
pub const DEFAULT_ITEM_WIDTH: f64 = 200.0;

/// Spawn region used when `add_item` gets no explicit position.
pub const SPAWN_X_MIN: f64 = 200.0;
pub const SPAWN_X_SPAN: f64 = 400.0;
pub const SPAWN_Y_MIN: f64 = 100.0;
pub const SPAWN_Y_SPAN: f64 = 300.0;

/// Cosmetic tilt bound in degrees; rotations fall in `[-MAX, MAX]`.
pub const MAX_ROTATION_DEGREES: f64 = 8.0;

fn default_width() -> f64 {
    DEFAULT_ITEM_WIDTH
}

/// A note card on the board.
///
/// `id`, `x` and `y` must be present on decode; every other field may be
/// missing or `null` and then takes its fresh-card default. A `null`
/// position decodes as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    #[serde(deserialize_with = "null_as_default")]
    pub x: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub y: f64,
    /// Degrees, cosmetic only.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rotation: f64,
    /// Stacking order. Higher renders on top.
    #[serde(default, deserialize_with = "null_as_default")]
    pub z_index: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub photo_src: Option<String>,
    #[serde(default = "default_width", deserialize_with = "null_as_item_width")]
    pub width: f64,
    /// May reference a category that no longer exists.
    #[serde(default)]
    pub category: Option<CategoryId>,
}

impl Item {
    /// Creates a blank card with a generated id.
    pub fn new(x: f64, y: f64, rotation: f64, z_index: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            x,
            y,
            rotation,
            z_index,
            title: String::new(),
            description: String::new(),
            photo_src: None,
            width: DEFAULT_ITEM_WIDTH,
            category: None,
        }
    }

    /// Merges every field set in `patch` into this card.
    ///
    /// Returns whether any value actually changed.
    pub fn apply(&mut self, patch: ItemPatch) -> bool {
        let before = self.clone();
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(photo_src) = patch.photo_src {
            self.photo_src = photo_src;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        *self != before
    }
}

/// Partial update for a card.
///
/// `None` leaves a field untouched. For nullable fields the inner option
/// carries the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo_src: Option<Option<String>>,
    pub width: Option<f64>,
    pub category: Option<Option<CategoryId>>,
}

impl ItemPatch {
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn category(value: Option<CategoryId>) -> Self {
        Self {
            category: Some(value),
            ..Self::default()
        }
    }
}
