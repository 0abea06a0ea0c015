//! # Wire models for the case and report exchanges
//!
//! These mirror what the remote API actually sends, camelCase field names
//! included. Every optional field defaults to `None` so a sparse row from the
//! server still deserializes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A support case as returned by `GET /cases` and `POST /cases`.
///
/// Read-only from the client's perspective apart from creation; the `id` is the
/// only identity and it is server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseInfo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<Assignee>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl CaseInfo {
    /// Who the case is assigned to, for display: `assignedTo` when present, else
    /// `userId`, else `None` (rendered as a placeholder dash).
    pub fn assignee_label(&self) -> Option<String> {
        self.assigned_to
            .as_ref()
            .map(Assignee::to_string)
            .or_else(|| self.user_id.map(|id| id.to_string()))
    }
}

/// The `assignedTo` field: some deployments store a user id, others a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Assignee {
    Id(i64),
    Name(String),
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignee::Id(id) => write!(f, "{id}"),
            Assignee::Name(name) => f.write_str(name),
        }
    }
}

/// Body of `POST /cases`. The server echoes the created [`CaseInfo`] back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCase {
    pub title: String,
    pub description: String,
    pub assigned_to: i64,
    pub user_id: i64,
}
