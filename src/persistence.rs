//! High-score persistence on top of a small key-value backend.
//!
//! The browser build stores the record in `window.localStorage`; tests and
//! headless hosts use [`MemoryStorage`]. Failures never reach the game: a
//! missing or malformed record loads as zeroes and a failed write is logged.

use std::collections::HashMap;

use thiserror::Error;

use crate::model::HighScores;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("malformed high-score record: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, resolved on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let win = web_sys::window().ok_or(StorageError::Unavailable)?;
        win.local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        Self { items }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The high-score record stored under a fixed key.
#[derive(Clone, Debug)]
pub struct HighScoreStore<K> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> HighScoreStore<K> {
    pub fn new(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    fn try_load(&self) -> Result<Option<HighScores>, StorageError> {
        match self.backend.get_item(&self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn load(&self) -> HighScores {
        match self.try_load() {
            Ok(Some(scores)) => scores,
            Ok(None) => HighScores::default(),
            Err(e) => {
                log::warn!("ignoring stored high scores: {}", e);
                HighScores::default()
            }
        }
    }

    fn try_save(&mut self, record: &HighScores) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record)?;
        self.backend.set_item(&self.key, &raw)
    }

    pub fn save(&mut self, record: &HighScores) {
        if let Err(e) = self.try_save(record) {
            log::warn!("could not persist high scores: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "puzzleHighScores";

    #[test]
    fn missing_record_loads_as_zeroes() {
        let store = HighScoreStore::new(MemoryStorage::new(), KEY);
        assert_eq!(store.load(), HighScores::default());
    }

    #[test]
    fn malformed_record_loads_as_zeroes() {
        for raw in ["not json", "42", r#"{"easy":"lots"}"#, r#"{"easy":1.5}"#] {
            let store = HighScoreStore::new(MemoryStorage::with_item(KEY, raw), KEY);
            assert_eq!(store.load(), HighScores::default(), "raw value {raw:?}");
        }
    }

    #[test]
    fn partial_record_fills_missing_fields() {
        let store = HighScoreStore::new(MemoryStorage::with_item(KEY, r#"{"hard":12}"#), KEY);
        assert_eq!(store.load(), HighScores { hard: 12, ..Default::default() });
    }

    #[test]
    fn save_overwrites_stored_record() {
        let mut store = HighScoreStore::new(MemoryStorage::with_item(KEY, "garbage"), KEY);
        let record = HighScores { easy: 3, medium: 4, hard: 5, total: 12 };
        store.save(&record);
        assert_eq!(
            store.backend().raw(KEY),
            Some(r#"{"easy":3,"medium":4,"hard":5,"total":12}"#)
        );
        assert_eq!(store.load(), record);
    }
}
