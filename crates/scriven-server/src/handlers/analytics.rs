//! Analytics handlers

use crate::{error::ApiError, extractors::AuthUser, AppState};
use axum::{extract::State, Json};
use scriven_types::{Analytics, WritingStats};
use serde::Serialize;

/// Writings listed in the per-user top performers.
const TOP_WRITINGS_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    success: bool,
    analytics: AnalyticsBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsBody {
    #[serde(flatten)]
    totals: Analytics,
    top_writings: Vec<WritingStats>,
}

pub async fn analytics(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let totals = state
        .store
        .get_analytics(&auth.user_id)
        .ok_or_else(|| ApiError::NotFound("Analytics not found".to_string()))?;

    let mut writings = state.store.get_writings_by_author(&auth.user_id);
    writings.retain(|w| w.is_public);
    writings.sort_by(|a, b| b.views.cmp(&a.views));
    writings.truncate(TOP_WRITINGS_LIMIT);

    let top_writings = writings
        .into_iter()
        .map(|w| WritingStats {
            id: w.id,
            title: w.title,
            views: w.views,
            upvotes: w.upvotes.len(),
            shares: w.shares,
        })
        .collect();

    Ok(Json(AnalyticsResponse {
        success: true,
        analytics: AnalyticsBody {
            totals,
            top_writings,
        },
    }))
}
