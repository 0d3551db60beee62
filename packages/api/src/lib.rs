//! # API crate — client-side auth boundary for CampusChat
//!
//! This crate owns everything between the signup/login forms and the remote
//! auth endpoints: the typed request payloads, their local validation, the
//! HTTP client that speaks the wire contract, and the flows that keep the
//! durable session slot in step with each outcome.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth::requests`] | Request payloads ([`SignupRequest`], [`LoginRequest`]) and their pure validation |
//! | [`auth::client`] | [`AuthApi`] trait, the reqwest-backed [`HttpAuthApi`], response parsing, [`AuthError`] |
//! | [`auth::flow`] | [`attempt_signup`] / [`attempt_login`] / [`attempt_logout`]: validate, submit, persist |
//! | [`models`] | The identity record returned by the server ([`AuthUser`]) |
//!
//! No UI types appear here; the busy flag, toasts, and the auth signal live
//! in the `ui` crate and wrap these flows.

pub mod auth;
pub mod models;

pub use auth::client::{AuthApi, AuthError, HttpAuthApi};
pub use auth::flow::{attempt_login, attempt_logout, attempt_signup};
pub use auth::requests::{
    LoginRequest, ScheduleEntry, SignupRequest, ValidationError, CAMPUS_MODE,
};
pub use models::AuthUser;
