//! Login page with university ID and password.

use api::LoginRequest;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{use_auth, use_login};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let login = use_login();
    let loading = login.loading;

    let mut uni_id = use_signal(String::new);
    let mut password = use_signal(String::new);

    // If already signed in, go straight to the chat
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Chat {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        login.submit(LoginRequest {
            uni_id: uni_id(),
            password: password(),
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-page__title", "CampusChat" }
            p { class: "auth-page__subtitle", "Sign in to your account" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                Input {
                    class: "w-full",
                    r#type: "text",
                    placeholder: "University ID",
                    value: uni_id(),
                    oninput: move |evt: FormEvent| uni_id.set(evt.value()),
                }

                Input {
                    class: "w-full",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-page__footer",
                "Don't have an account? "
                Link {
                    class: "auth-page__link",
                    to: Route::Register {},
                    "Sign up"
                }
            }
        }
    }
}
