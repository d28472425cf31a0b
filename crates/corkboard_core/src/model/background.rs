//! Board background settings.
//!
//! One record per board. Values are stored as given: an out-of-range
//! `brightness` or an unknown surface kind is kept and left to the
//! renderer to clamp or ignore.

use crate::model::decode::{null_as_background_color, null_as_brightness, null_as_default};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKGROUND_COLOR: &str = "#c49a6c";
pub const DEFAULT_BRIGHTNESS: f64 = 1.0;

/// Surface kind. Unknown wire values are preserved in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BackgroundKind {
    #[default]
    Cork,
    Solid,
    Image,
    Other(String),
}

impl BackgroundKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cork => "cork",
            Self::Solid => "solid",
            Self::Image => "image",
            Self::Other(value) => value.as_str(),
        }
    }
}

impl From<String> for BackgroundKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "cork" => Self::Cork,
            "solid" => Self::Solid,
            "image" => Self::Image,
            _ => Self::Other(value),
        }
    }
}

impl From<BackgroundKind> for String {
    fn from(value: BackgroundKind) -> Self {
        match value {
            BackgroundKind::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// Background appearance. Fields missing or `null` on decode take default
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Background {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: BackgroundKind,
    #[serde(deserialize_with = "null_as_background_color")]
    pub color: String,
    pub image_url: Option<String>,
    /// Nominally 0..=1. Non-finite values are saved as `null` and come
    /// back as the default.
    #[serde(deserialize_with = "null_as_brightness")]
    pub brightness: f64,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            kind: BackgroundKind::Cork,
            color: DEFAULT_BACKGROUND_COLOR.to_string(),
            image_url: None,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl Background {
    /// Merges every field set in `patch`. Returns whether anything changed.
    pub fn apply(&mut self, patch: BackgroundPatch) -> bool {
        let before = self.clone();
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(brightness) = patch.brightness {
            self.brightness = brightness;
        }
        *self != before
    }
}

/// Partial update for the background. `Some(None)` clears `image_url`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundPatch {
    pub kind: Option<BackgroundKind>,
    pub color: Option<String>,
    pub image_url: Option<Option<String>>,
    pub brightness: Option<f64>,
}
