//! Test stores — in-memory `SettingsStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use randgen_core::settings::{SettingKey, SettingValue, SettingsStore};

/// An in-memory settings store. Also counts writes, so tests can assert that
/// a read-only path never wrote.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<SettingKey, SettingValue>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`. Seeding does not count as
    /// a write.
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = (SettingKey, SettingValue)>) -> Self {
        Self {
            values: Mutex::new(entries.into_iter().collect()),
            writes: Mutex::new(0),
        }
    }

    /// Number of `write` calls so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl SettingsStore for MemoryStore {
    fn read(&self, key: SettingKey) -> Option<SettingValue> {
        self.values.lock().unwrap().get(&key).cloned()
    }

    fn write(&self, key: SettingKey, value: SettingValue) {
        self.values.lock().unwrap().insert(key, value);
        *self.writes.lock().unwrap() += 1;
    }
}

/// A store whose namespace the host refused to open: reads find nothing and
/// writes are dropped.
#[derive(Debug)]
pub struct UnavailableStore;

impl SettingsStore for UnavailableStore {
    fn read(&self, _key: SettingKey) -> Option<SettingValue> {
        None
    }

    fn write(&self, _key: SettingKey, _value: SettingValue) {}
}
