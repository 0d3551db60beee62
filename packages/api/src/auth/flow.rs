//! # Submit flows: validate, send, persist
//!
//! Each flow is one best-effort attempt: validate locally (nothing is sent
//! for an invalid request), perform one call through an [`AuthApi`], and on
//! success keep the durable `"chat-user"` slot in step with the outcome. No
//! retries, timeouts, or cancellation.
//!
//! UI state stays with the caller: the `ui` crate's hooks wrap these flows
//! with the busy flag, the auth signal, and error toasts.

use store::{SessionStore, CHAT_USER_KEY};

use crate::auth::client::{AuthApi, AuthError};
use crate::auth::requests::{LoginRequest, SignupRequest};
use crate::models::AuthUser;

/// Validate and submit a signup request.
///
/// On success the returned identity is also persisted under
/// [`CHAT_USER_KEY`]; on any failure the slot is left untouched.
pub async fn attempt_signup<A, S>(
    api: &A,
    sessions: &S,
    request: &SignupRequest,
) -> Result<AuthUser, AuthError>
where
    A: AuthApi,
    S: SessionStore,
{
    request.validate()?;
    let user = api.signup(request).await?;
    sessions.put_json(CHAT_USER_KEY, &user);
    Ok(user)
}

/// Validate and submit a login request. Same persistence contract as
/// [`attempt_signup`].
pub async fn attempt_login<A, S>(
    api: &A,
    sessions: &S,
    request: &LoginRequest,
) -> Result<AuthUser, AuthError>
where
    A: AuthApi,
    S: SessionStore,
{
    request.validate()?;
    let user = api.login(request).await?;
    sessions.put_json(CHAT_USER_KEY, &user);
    Ok(user)
}

/// End the server session and drop the persisted identity.
///
/// The slot is only removed once the server confirms; a failed logout keeps
/// the local session intact.
pub async fn attempt_logout<A, S>(api: &A, sessions: &S) -> Result<(), AuthError>
where
    A: AuthApi,
    S: SessionStore,
{
    api.logout().await?;
    sessions.remove(CHAT_USER_KEY);
    Ok(())
}
