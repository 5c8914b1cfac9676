//! In-memory entry store for tests

use super::store::EntryStore;
use crate::error::Result;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Entry store held in a sorted map; listing order matches `FileEntryStore`
#[derive(Default)]
pub struct MemoryEntryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `(title, content)` pairs
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(t, c)| (t.to_string(), c.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EntryStore for MemoryEntryStore {
    fn get(&self, title: &str) -> Result<Option<String>> {
        Ok(self.lock().get(title).cloned())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.lock().keys().cloned().collect())
    }

    fn save(&self, title: &str, content: &str) -> Result<()> {
        self.lock().insert(title.to_string(), content.to_string());
        Ok(())
    }

    fn exists(&self, title: &str) -> Result<bool> {
        Ok(self.lock().contains_key(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryEntryStore::new();
        assert!(store.get("Git").unwrap().is_none());
        assert!(store.list().unwrap().is_empty());

        store.save("Git", "version control").unwrap();
        store.save("CSS", "styles").unwrap();

        assert_eq!(store.get("Git").unwrap().as_deref(), Some("version control"));
        assert_eq!(store.list().unwrap(), vec!["CSS", "Git"]);
        assert!(store.exists("Git").unwrap());
        assert!(!store.exists("git").unwrap());
    }
}
