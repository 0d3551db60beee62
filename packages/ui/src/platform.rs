//! Platform wiring for the auth flows.
//!
//! Picks the [`store::SessionStore`] backend and server origin appropriate
//! for the compile target:
//! - **Web** (WASM + `web` feature): `localStorage` via
//!   [`store::WebStorageStore`], origin taken from the window location.
//! - **Native**: filesystem via [`store::FileStore`] under the platform data
//!   directory, origin from `CAMPUSCHAT_SERVER_URL` or a localhost default.

use api::HttpAuthApi;

/// Create a platform-appropriate session store.
pub fn make_session_store() -> impl store::SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::WebStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("campuschat");
        store::FileStore::new(base)
    }
}

/// Create an [`HttpAuthApi`] pointed at the backend for this platform.
pub fn make_auth_api() -> HttpAuthApi {
    HttpAuthApi::new(server_origin())
}

fn server_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(url) = std::env::var("CAMPUSCHAT_SERVER_URL") {
            return url;
        }
    }
    "http://localhost:8080".to_string()
}
