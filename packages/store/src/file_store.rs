//! # Filesystem-backed session store
//!
//! [`FileStore`] persists session slots as one file per key under a base
//! directory. It is the native counterpart of the browser's `localStorage`
//! store, used when the app runs outside a browser (tooling, tests, a
//! future desktop shell).
//!
//! Callers obtain a platform-appropriate base via `dirs::data_dir()`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/campuschat/` |
//! | Linux | `~/.local/share/campuschat/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\campuschat\` |

use std::path::PathBuf;

use crate::session::SessionStore;

/// Filesystem-backed SessionStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.slot_path(key)).ok()
    }

    fn put(&self, key: &str, value: &str) {
        let path = self.slot_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.slot_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CHAT_USER_KEY;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        store.put(CHAT_USER_KEY, "{\"id\":\"u1\"}");

        // Re-open from the same directory
        let store2 = FileStore::new(dir.path().to_path_buf());
        assert_eq!(
            store2.get(CHAT_USER_KEY).as_deref(),
            Some("{\"id\":\"u1\"}")
        );

        store2.remove(CHAT_USER_KEY);
        assert!(store.get(CHAT_USER_KEY).is_none());
    }

    #[test]
    fn test_missing_base_dir_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert!(store.get(CHAT_USER_KEY).is_none());

        // A write creates the directory on demand
        store.put("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
