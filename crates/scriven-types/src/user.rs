//! User account types

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered account.
///
/// `gov_id` is the registration credential; it never leaves the process,
/// so it is skipped during serialization and the struct deliberately does
/// not implement `Deserialize` from the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(skip_serializing)]
    pub gov_id: String,
    pub email: String,
    pub name: String,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Ids of accounts following this user; each id appears at most once.
    pub followers: Vec<String>,
    /// Ids of accounts this user follows; never contains the user's own id.
    pub following: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Compact author identity embedded in writing and comment responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub verified: bool,
}

impl From<&User> for AuthorSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            verified: user.verified,
        }
    }
}
