//! RAM-backed storage
//!
//! Host-side stand-in for the panel's non-volatile storage; records
//! live as long as the process.

use heapless::Vec;

use vigil_core::traits::{NonVolatileStorage, StorageError, StorageKey};

/// Maximum stored record size in bytes
pub const MAX_RECORD_LEN: usize = 64;

/// Number of distinct storage keys
const KEY_SLOTS: usize = 1;

/// RAM-backed key-value storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: [Option<Vec<u8, MAX_RECORD_LEN>>; KEY_SLOTS],
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_index(key: StorageKey) -> usize {
        key.as_u8() as usize
    }
}

impl NonVolatileStorage for MemoryStorage {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        let record = self.slots[Self::slot_index(key)]
            .as_ref()
            .ok_or(StorageError::NotFound)?;

        if buffer.len() < record.len() {
            return Err(StorageError::BufferTooSmall);
        }
        buffer[..record.len()].copy_from_slice(record);
        Ok(record.len())
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        let mut record = Vec::new();
        record
            .extend_from_slice(data)
            .map_err(|_| StorageError::Full)?;
        self.slots[Self::slot_index(key)] = Some(record);
        Ok(())
    }

    fn exists(&mut self, key: StorageKey) -> bool {
        self.slots[Self::slot_index(key)].is_some()
    }
}
