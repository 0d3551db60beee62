//! Authentication context and hooks for the UI.

use api::AuthUser;
use dioxus::prelude::*;
use store::{SessionStore, CHAT_USER_KEY};

use crate::platform::{make_auth_api, make_session_store};
use crate::toast::{use_toast, ToastOptions};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
///
/// On mount the persisted `"chat-user"` record, if any, is restored so a
/// signed-in user survives reloads. The record is written by the signup and
/// login flows and removed on logout; nothing else touches it.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Restore the persisted session on mount
    use_effect(move || {
        let sessions = make_session_store();
        let user = sessions.get_json::<AuthUser>(CHAT_USER_KEY);
        auth_state.set(AuthState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let toast = use_toast();

    let onclick = move |_| async move {
        let client = make_auth_api();
        let sessions = make_session_store();
        match api::attempt_logout(&client, &sessions).await {
            Ok(()) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::error!("Logout failed: {}", e);
                toast.error(e.to_string(), ToastOptions::new());
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
