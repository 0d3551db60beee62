//! Chat home shown after authentication.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::Route;

/// Chat home component. Conversations live elsewhere; this view anchors the
/// signed-in session and the logout path.
#[component]
pub fn Chat() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
    }

    rsx! {
        div {
            class: "chat-page",

            if let Some(user) = auth().user {
                header {
                    class: "chat-header",
                    h1 { class: "chat-header__brand", "CampusChat" }
                    div {
                        class: "chat-header__user",
                        span { class: "chat-header__name", {user.display_name()} }
                        LogoutButton { class: "btn btn--outline" }
                    }
                }

                main {
                    class: "chat-placeholder",
                    p { "Signed in as {user.uni_id}" }
                    p { class: "chat-placeholder__hint", "Your conversations will appear here." }
                }
            }
        }
    }
}
