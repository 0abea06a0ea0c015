//! # Session record model
//!
//! [`UserInfo`] is the single record the client persists between page loads. It is
//! the `user` object returned by the login exchange, reduced to the fields the UI
//! actually renders. The type is `Serialize + Deserialize + PartialEq` so it can be
//! written to browser storage as JSON and compared when the auth signal updates.

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `POST /auth/login` and persisted by the
/// session store. Absence of a stored record means "unauthenticated".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub role: String,
    /// Present when the server includes it; not required for rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
