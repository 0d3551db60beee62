//! # Session storage — durable key-value slots for client state
//!
//! [`SessionStore`] is the small trait behind which CampusChat persists
//! client-side session data, most importantly the authenticated user record
//! under [`CHAT_USER_KEY`]. Implementations:
//!
//! | Store | Platform | Backing |
//! |-------|----------|---------|
//! | [`crate::MemoryStore`] | any | `HashMap` behind a mutex (tests, ephemeral fallback) |
//! | [`crate::WebStorageStore`] | web (`web` feature) | browser `localStorage` |
//! | [`crate::FileStore`] | native | one file per key under a data directory |
//!
//! All implementations swallow backend errors: a corrupted or unavailable
//! local store degrades to "no persisted session" rather than crashing the
//! app. The authoritative session always lives on the server.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key under which the authenticated user record is persisted.
pub const CHAT_USER_KEY: &str = "chat-user";

/// A durable string-keyed slot store.
pub trait SessionStore {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str);

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);

    /// Read and JSON-decode the value under `key`.
    ///
    /// Returns `None` when the slot is empty or holds something that no
    /// longer decodes as `T`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        serde_json::from_str(&self.get(key)?).ok()
    }

    /// JSON-encode `value` and write it under `key`.
    fn put_json<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            self.put(key, &json);
        }
    }
}
