//! Signup and login hooks shared by the auth views.
//!
//! Each hook owns a `loading` signal that is true from the moment a
//! validated request is sent until the attempt settles, and false otherwise.
//! Requests that fail validation never touch the flag or the network.
//!
//! Submitting again while a request is in flight starts a second request;
//! views prevent that by disabling their submit button on `loading`.

use api::{LoginRequest, SignupRequest};
use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::platform::{make_auth_api, make_session_store};
use crate::toast::{use_toast, ToastApi, ToastOptions};

/// Handle returned by [`use_signup`].
#[derive(Clone, Copy)]
pub struct UseSignup {
    auth: Signal<AuthState>,
    toast: ToastApi,
    /// True while a submission is in flight.
    pub loading: Signal<bool>,
}

/// Hook driving the signup form: validation, submission, session update.
pub fn use_signup() -> UseSignup {
    UseSignup {
        auth: use_auth(),
        toast: use_toast(),
        loading: use_signal(|| false),
    }
}

impl UseSignup {
    /// Validate `request` and submit it to the signup endpoint.
    ///
    /// Every failure surfaces as exactly one error toast; on success the
    /// auth state is set and the view's redirect takes over.
    pub fn submit(&self, request: SignupRequest) {
        let mut auth = self.auth;
        let toast = self.toast;
        let mut loading = self.loading;

        spawn(async move {
            if let Err(err) = request.validate() {
                toast.error(err.to_string(), ToastOptions::new());
                return;
            }

            loading.set(true);
            let client = make_auth_api();
            let sessions = make_session_store();
            match api::attempt_signup(&client, &sessions, &request).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                }
                Err(err) => {
                    tracing::error!("Signup failed: {}", err);
                    toast.error(err.to_string(), ToastOptions::new());
                }
            }
            loading.set(false);
        });
    }
}

/// Handle returned by [`use_login`].
#[derive(Clone, Copy)]
pub struct UseLogin {
    auth: Signal<AuthState>,
    toast: ToastApi,
    /// True while a submission is in flight.
    pub loading: Signal<bool>,
}

/// Hook driving the login form.
pub fn use_login() -> UseLogin {
    UseLogin {
        auth: use_auth(),
        toast: use_toast(),
        loading: use_signal(|| false),
    }
}

impl UseLogin {
    /// Validate `request` and submit it to the login endpoint.
    pub fn submit(&self, request: LoginRequest) {
        let mut auth = self.auth;
        let toast = self.toast;
        let mut loading = self.loading;

        spawn(async move {
            if let Err(err) = request.validate() {
                toast.error(err.to_string(), ToastOptions::new());
                return;
            }

            loading.set(true);
            let client = make_auth_api();
            let sessions = make_session_store();
            match api::attempt_login(&client, &sessions, &request).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                }
                Err(err) => {
                    tracing::error!("Login failed: {}", err);
                    toast.error(err.to_string(), ToastOptions::new());
                }
            }
            loading.set(false);
        });
    }
}
