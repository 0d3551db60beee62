//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_auth_api, make_session_store};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod toast;
pub use toast::{use_toast, ToastApi, ToastOptions, ToastProvider};

mod signup;
pub use signup::{use_login, use_signup, UseLogin, UseSignup};
