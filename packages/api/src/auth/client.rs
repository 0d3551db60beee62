//! # HTTP auth client
//!
//! [`AuthApi`] is the seam between the auth flows and the network; the
//! reqwest-backed [`HttpAuthApi`] is the production implementation, and
//! tests substitute scripted stubs.
//!
//! The remote reports failures in-band: every endpoint answers with a JSON
//! body that is either the expected payload or `{"error": "..."}`, whatever
//! the HTTP status. Responses are therefore parsed without consulting the
//! status code, mirroring the server's contract.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::requests::{LoginRequest, SignupRequest, ValidationError};
use crate::models::AuthUser;

pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";

/// Why an auth attempt failed. `Display` is the user-facing message.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request failed local validation; nothing was sent.
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    /// The server answered with an explicit `{"error": ...}` body.
    #[error("{0}")]
    Server(String),
    /// The request never completed.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not the JSON shape the contract promises.
    #[error("Unexpected response from the server")]
    Malformed(#[source] serde_json::Error),
}

/// The auth endpoints, abstracted for testing.
pub trait AuthApi {
    async fn signup(&self, request: &SignupRequest) -> Result<AuthUser, AuthError>;
    async fn login(&self, request: &LoginRequest) -> Result<AuthUser, AuthError>;
    async fn logout(&self) -> Result<(), AuthError>;
}

/// Reqwest-backed [`AuthApi`] speaking to a CampusChat server.
///
/// On wasm32 reqwest rides the browser's `fetch`, so the same client works
/// in the web app and in native tooling.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    /// Create a client for the server at `base_url` (scheme + authority,
    /// e.g. the window origin). A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AuthError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let text = response.text().await?;
        parse_reply(&text)
    }
}

impl AuthApi for HttpAuthApi {
    async fn signup(&self, request: &SignupRequest) -> Result<AuthUser, AuthError> {
        self.post_json(SIGNUP_PATH, request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthUser, AuthError> {
        self.post_json(LOGIN_PATH, request).await
    }

    async fn logout(&self) -> Result<(), AuthError> {
        let response = self.client.post(self.url(LOGOUT_PATH)).send().await?;
        let text = response.text().await?;
        // The logout payload carries nothing the client needs.
        parse_reply::<serde_json::Value>(&text).map(|_| ())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: String,
}

/// A response body: either the expected payload or an in-band error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiReply<T> {
    // Tried first, so a body carrying an `error` key is always a failure.
    Error(ErrorReply),
    Ok(T),
}

fn parse_reply<T: DeserializeOwned>(body: &str) -> Result<T, AuthError> {
    match serde_json::from_str::<ApiReply<T>>(body).map_err(AuthError::Malformed)? {
        ApiReply::Error(reply) => Err(AuthError::Server(reply.error)),
        ApiReply::Ok(payload) => Ok(payload),
    }
}
