//! Two-step link gesture state.

use crate::model::item::ItemId;

/// Progress of a connect gesture: pick a source card, then a target card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectState {
    #[default]
    Idle,
    /// A source card is picked and the next pick completes the link.
    Pending { from: ItemId },
}

impl ConnectState {
    /// UI-facing `connectMode` flag.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// UI-facing `connectFrom` value.
    pub fn source(&self) -> Option<&ItemId> {
        match self {
            Self::Idle => None,
            Self::Pending { from } => Some(from),
        }
    }

    /// Resets to idle and hands back the pending source, if any.
    pub(crate) fn take_source(&mut self) -> Option<ItemId> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Pending { from } => Some(from),
        }
    }
}
