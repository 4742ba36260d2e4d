//! Per-user engagement aggregates

use serde::Serialize;

/// Derived engagement totals, maintained by the store alongside every
/// mutation. Lifecycle is 1:1 with the user: created at registration,
/// never deleted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub user_id: String,
    pub total_views: u64,
    /// Recomputed from all of the author's writings on each upvote.
    pub total_upvotes: u64,
    pub total_shares: u64,
    /// Dollars; reassigned as `total_views * 0.1` on each view increment.
    pub total_earnings: f64,
    pub writings_count: u64,
    pub followers_count: u64,
}

impl Analytics {
    /// Fresh record for a newly registered user.
    pub fn zeroed(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            total_views: 0,
            total_upvotes: 0,
            total_shares: 0,
            total_earnings: 0.0,
            writings_count: 0,
            followers_count: 0,
        }
    }
}

/// Per-writing engagement snapshot embedded in analytics responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingStats {
    pub id: String,
    pub title: String,
    pub views: u64,
    pub upvotes: usize,
    pub shares: u64,
}
