use dioxus::prelude::*;

use ui::{AuthProvider, ToastProvider};
use views::{Chat, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Register {},
    #[route("/chat")]
    Chat {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` based on auth state.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading {
        if auth().user.is_some() {
            nav.replace(Route::Chat {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
