//! Client-side authentication: request payloads, validation, HTTP client,
//! and the submit flows.

pub mod client;
pub mod flow;
pub mod requests;
