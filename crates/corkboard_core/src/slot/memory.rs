//! In-process slot with an optional byte quota.

use super::{BoardSlot, SlotError, SlotResult};
use std::collections::HashMap;

/// Map-backed slot. Contents live as long as the value.
///
/// With a capacity set, writes larger than the capacity fail the way
/// browser storage does when its quota is exhausted.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
    capacity: Option<usize>,
    writes: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot that rejects blobs larger than `capacity` bytes.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Slot pre-filled with one entry, as if written by an earlier session.
    pub fn with_entry(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let mut slot = Self::default();
        slot.entries.insert(key.into(), blob.into());
        slot
    }

    pub fn set_capacity_limit(&mut self, capacity: Option<usize>) {
        self.capacity = capacity;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl BoardSlot for MemorySlot {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> SlotResult<()> {
        if let Some(capacity) = self.capacity {
            if blob.len() > capacity {
                return Err(SlotError::QuotaExceeded {
                    key: key.to_string(),
                    size: blob.len(),
                    capacity,
                });
            }
        }
        self.entries.insert(key.to_string(), blob.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemorySlot;
    use crate::slot::{BoardSlot, SlotError};

    #[test]
    fn missing_key_reads_as_none() {
        let slot = MemorySlot::new();
        assert_eq!(slot.read("absent").unwrap(), None);
    }

    #[test]
    fn quota_rejects_oversized_blob_and_keeps_previous_value() {
        let mut slot = MemorySlot::with_capacity_limit(4);
        slot.write("k", "abcd").unwrap();

        let err = slot.write("k", "abcde").unwrap_err();
        assert!(matches!(
            err,
            SlotError::QuotaExceeded {
                size: 5,
                capacity: 4,
                ..
            }
        ));
        assert_eq!(slot.get("k"), Some("abcd"));
        assert_eq!(slot.write_count(), 1);
    }
}
