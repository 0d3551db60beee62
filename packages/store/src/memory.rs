use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and as an ephemeral fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.slots.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CHAT_USER_KEY;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
        name: String,
    }

    #[test]
    fn test_put_and_get() {
        let store = MemoryStore::new();

        // Initially empty
        assert!(store.get(CHAT_USER_KEY).is_none());

        store.put(CHAT_USER_KEY, "{\"id\":\"1\"}");
        assert_eq!(store.get(CHAT_USER_KEY).as_deref(), Some("{\"id\":\"1\"}"));

        // Overwrite replaces the previous value
        store.put(CHAT_USER_KEY, "{\"id\":\"2\"}");
        assert_eq!(store.get(CHAT_USER_KEY).as_deref(), Some("{\"id\":\"2\"}"));
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();

        store.put("a", "1");
        store.put("b", "2");
        store.remove("a");

        assert!(store.get("a").is_none());
        assert_eq!(store.get("b").as_deref(), Some("2"));

        // Removing a missing key is a no-op
        store.remove("a");
    }

    #[test]
    fn test_json_roundtrip() {
        let store = MemoryStore::new();

        let record = Record {
            id: "u1".to_string(),
            name: "Ada".to_string(),
        };
        store.put_json(CHAT_USER_KEY, &record);

        let loaded: Record = store.get_json(CHAT_USER_KEY).unwrap();
        assert_eq!(loaded, record);

        // The raw slot holds the JSON serialization
        let raw = store.get(CHAT_USER_KEY).unwrap();
        assert_eq!(raw, serde_json::to_string(&record).unwrap());
    }

    #[test]
    fn test_get_json_tolerates_garbage() {
        let store = MemoryStore::new();
        store.put(CHAT_USER_KEY, "not json");
        assert!(store.get_json::<Record>(CHAT_USER_KEY).is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.put("k", "v");
        assert_eq!(clone.get("k").as_deref(), Some("v"));
    }
}
