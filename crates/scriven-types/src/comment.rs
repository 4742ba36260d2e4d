//! Comment types

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Reply to a writing. Comments cannot be edited or deleted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub writing_id: String,
    pub author_id: String,
    /// Non-empty after trimming; enforced by the handler, not the store.
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
