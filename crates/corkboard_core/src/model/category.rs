//! Category tags and their display styling.
//!
//! # Responsibility
//! - Define the category record and its typed partial update.
//! - Provide the built-in category set used for fresh or unreadable boards.
//!
//! # Invariants
//! - Deleting a category never rewrites items; item references may dangle.

use crate::model::decode::null_as_default;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CategoryId = String;

pub const PLACEHOLDER_CATEGORY_LABEL: &str = "New category";
pub const PLACEHOLDER_COLOR_PRIMARY: &str = "#d5d8dc";
pub const PLACEHOLDER_COLOR_SECONDARY: &str = "#839192";
pub const PLACEHOLDER_ICON: &str = "🏷";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
    pub color_primary: String,
    pub color_secondary: String,
    /// Short glyph shown next to the label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

impl Category {
    /// Creates a category with a generated id and placeholder styling.
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: PLACEHOLDER_CATEGORY_LABEL.to_string(),
            color_primary: PLACEHOLDER_COLOR_PRIMARY.to_string(),
            color_secondary: PLACEHOLDER_COLOR_SECONDARY.to_string(),
            icon: PLACEHOLDER_ICON.to_string(),
        }
    }

    /// Merges every field set in `patch`. Returns whether anything changed.
    pub fn apply(&mut self, patch: CategoryPatch) -> bool {
        let before = self.clone();
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(color_primary) = patch.color_primary {
            self.color_primary = color_primary;
        }
        if let Some(color_secondary) = patch.color_secondary {
            self.color_secondary = color_secondary;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        *self != before
    }
}

/// Partial update for a category. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub label: Option<String>,
    pub color_primary: Option<String>,
    pub color_secondary: Option<String>,
    pub icon: Option<String>,
}

fn builtin(id: &str, label: &str, primary: &str, secondary: &str, icon: &str) -> Category {
    Category {
        id: id.to_string(),
        label: label.to_string(),
        color_primary: primary.to_string(),
        color_secondary: secondary.to_string(),
        icon: icon.to_string(),
    }
}

/// Built-in categories for a fresh board.
pub fn default_categories() -> Vec<Category> {
    vec![
        builtin("person", "Person", "#85c1e9", "#2471a3", "👤"),
        builtin("organization", "Organization", "#d44a4a", "#a10d0d", "🏢"),
        builtin("place", "Place", "#82e0aa", "#1e8449", "📍"),
        builtin("evidence", "Evidence", "#c39bd3", "#7d3c98", "🔍"),
        builtin("lead", "Lead", "#f0b27a", "#ca6f1e", "💡"),
    ]
}

#[cfg(test)]
mod tests {
    use super::{default_categories, Category, CategoryPatch};
    use std::collections::HashSet;

    #[test]
    fn default_category_ids_are_unique() {
        let categories = default_categories();
        let ids: HashSet<_> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), categories.len());
        assert!(ids.contains("evidence"));
    }

    #[test]
    fn placeholder_ids_differ() {
        assert_ne!(Category::placeholder().id, Category::placeholder().id);
    }

    #[test]
    fn apply_merges_only_given_fields() {
        let mut category = Category::placeholder();
        let changed = category.apply(CategoryPatch {
            label: Some("Suspect".to_string()),
            ..CategoryPatch::default()
        });
        assert!(changed);
        assert_eq!(category.label, "Suspect");
        assert_eq!(category.icon, super::PLACEHOLDER_ICON);
    }
}
