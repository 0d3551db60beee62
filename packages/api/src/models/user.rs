//! # Identity record for authenticated users
//!
//! [`AuthUser`] is the JSON body the auth endpoints return on success and
//! the value persisted under the `"chat-user"` slot. Field names follow the
//! server's wire contract verbatim: MongoDB-style `_id`, lower-camel
//! `uniId`, and capitalized `Department`.
//!
//! Only the fields the client actually renders are required; the profile
//! extras default so an older or newer server payload still decodes.

use serde::{Deserialize, Serialize};

/// The authenticated user record returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub uni_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, rename = "Department")]
    pub department: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

impl AuthUser {
    /// Full name for display in the chat UI.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
