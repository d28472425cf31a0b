//! Field decoders shared by the board records.
//!
//! An explicit JSON `null` decodes like a missing field. serde_json also
//! writes non-finite floats as `null`, so these decoders are what lets a
//! blob holding such a value be read back.

use serde::{Deserialize, Deserializer};

use super::background::{DEFAULT_BACKGROUND_COLOR, DEFAULT_BRIGHTNESS};
use super::item::DEFAULT_ITEM_WIDTH;

/// `null` becomes `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn null_as_item_width<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_ITEM_WIDTH))
}

pub(crate) fn null_as_brightness<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_BRIGHTNESS))
}

pub(crate) fn null_as_background_color<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()))
}
