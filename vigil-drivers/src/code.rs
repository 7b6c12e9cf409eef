//! Deactivation code storage
//!
//! The code rides inside the postcard-encoded `AlarmConfig` record, so
//! saving a new code rewrites the whole configuration.

use vigil_core::config::{AlarmConfig, CODE_LENGTH};
use vigil_core::traits::{CodeStore, NonVolatileStorage, StorageError, StorageKey};

/// An encoded `AlarmConfig` never exceeds this size
const CONFIG_BUF_LEN: usize = 32;

/// Code store over any non-volatile storage backend
///
/// The working copy is cached; storage is touched at construction and
/// on save.
pub struct StoredCodeStore<F> {
    storage: F,
    config: AlarmConfig,
}

impl<F: NonVolatileStorage> StoredCodeStore<F> {
    /// Load the configuration, falling back to factory defaults when
    /// the record is missing or does not decode
    pub fn load(mut storage: F) -> Self {
        let mut buffer = [0u8; CONFIG_BUF_LEN];
        let config = match storage.read(StorageKey::AlarmConfig, &mut buffer) {
            Ok(len) => postcard::from_bytes(&buffer[..len]).unwrap_or_default(),
            Err(_) => AlarmConfig::default(),
        };
        Self { storage, config }
    }

    /// Configuration currently in effect
    pub fn config(&self) -> &AlarmConfig {
        &self.config
    }

    /// Give the storage backend back, e.g. across a simulated reboot
    pub fn into_storage(self) -> F {
        self.storage
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let mut buffer = [0u8; CONFIG_BUF_LEN];
        let encoded = postcard::to_slice(&self.config, &mut buffer)
            .map_err(|_| StorageError::BufferTooSmall)?;
        self.storage.write(StorageKey::AlarmConfig, encoded)
    }
}

impl<F: NonVolatileStorage> CodeStore for StoredCodeStore<F> {
    fn save_code(&mut self, code: &[u8; CODE_LENGTH]) -> Result<(), StorageError> {
        self.config.code = *code;
        self.persist()
    }

    fn code_matches(&self, attempt: &[u8; CODE_LENGTH]) -> bool {
        attempt == &self.config.code
    }
}

#[cfg(test)]
mod tests {
    use vigil_core::config::DEFAULT_CODE;

    use crate::storage::MemoryStorage;

    use super::*;

    #[test]
    fn empty_storage_yields_factory_code() {
        let store = StoredCodeStore::load(MemoryStorage::new());
        assert!(store.code_matches(&DEFAULT_CODE));
        assert!(!store.code_matches(b"0000"));
    }

    #[test]
    fn saved_code_replaces_the_old_one() {
        let mut store = StoredCodeStore::load(MemoryStorage::new());
        store.save_code(b"4739").unwrap();

        assert!(store.code_matches(b"4739"));
        assert!(!store.code_matches(&DEFAULT_CODE));
    }

    #[test]
    fn saved_code_survives_reload() {
        let mut store = StoredCodeStore::load(MemoryStorage::new());
        store.save_code(b"4739").unwrap();

        let reloaded = StoredCodeStore::load(store.into_storage());
        assert!(reloaded.code_matches(b"4739"));
    }

    #[test]
    fn undecodable_record_falls_back_to_defaults() {
        let mut storage = MemoryStorage::new();
        storage.write(StorageKey::AlarmConfig, &[0xFF, 0xFF]).unwrap();

        let store = StoredCodeStore::load(storage);
        assert!(store.code_matches(&DEFAULT_CODE));
    }

    #[test]
    fn other_config_fields_survive_a_code_change() {
        let mut store = StoredCodeStore::load(MemoryStorage::new());
        let limit = store.config().over_temp_limit_c;

        store.save_code(b"2468").unwrap();
        let reloaded = StoredCodeStore::load(store.into_storage());
        assert_eq!(reloaded.config().over_temp_limit_c, limit);
    }
}
