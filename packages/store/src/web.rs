//! # Browser `localStorage` store — web-side persistence
//!
//! [`WebStorageStore`] is the [`SessionStore`] implementation used on the
//! **web platform**. It keeps session slots in the browser's `localStorage`
//! via [`web_sys`], so the authenticated user survives page reloads.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled or a full
//! quota degrades to "no persisted session" rather than crashing — the
//! in-memory auth state still works for the lifetime of the tab.

use crate::session::SessionStore;

/// `localStorage`-backed SessionStore for the web platform.
///
/// Zero-size and `Clone`-friendly: the underlying `Storage` handle is
/// re-fetched from the window on every operation, which the browser makes
/// cheap.
#[derive(Clone, Debug, Default)]
pub struct WebStorageStore;

impl WebStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for WebStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn put(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
