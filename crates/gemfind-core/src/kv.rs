//! Injected key-value storage for persisted user flags.

use std::collections::HashMap;
use std::sync::Mutex;

/// String-keyed persistent storage for per-user flags (joined, snoozed,
/// saved venues). The pipeline places no requirements on the backing
/// mechanism beyond get/set/has — callers inject whatever implementation
/// fits their platform.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Volatile in-memory store, used in tests and wherever persistence is not
/// wired up.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .map(|entries| entries.get(key).cloned())
            .unwrap_or(None)
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_unknown_key() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());
        assert!(!store.has("missing"));
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        assert!(store.has("k"));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let store = MemoryStore::new();
        store.set("k", "old");
        store.set("k", "new");
        assert_eq!(store.get("k").as_deref(), Some("new"));
    }
}
