//! User profile and follow handlers

use crate::{error::ApiError, extractors::AuthUser, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use scriven_types::Writing;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    success: bool,
    user: PublicProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    analytics: Option<AnalyticsSummary>,
    recent_writings: Vec<Writing>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
    verified: bool,
    followers: usize,
    following: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    total_views: u64,
    total_upvotes: u64,
    writings_count: u64,
}

#[derive(Debug, Serialize)]
pub struct FollowResponse {
    success: bool,
}

/// Most recent public writings shown on a profile.
const RECENT_WRITINGS_LIMIT: usize = 5;

pub async fn profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .store
        .get_user_by_id(&id)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let analytics = state.store.get_analytics(&id).map(|a| AnalyticsSummary {
        total_views: a.total_views,
        total_upvotes: a.total_upvotes,
        writings_count: a.writings_count,
    });

    let mut recent_writings: Vec<Writing> = state
        .store
        .get_writings_by_author(&id)
        .into_iter()
        .filter(|w| w.is_public)
        .collect();
    recent_writings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent_writings.truncate(RECENT_WRITINGS_LIMIT);

    Ok(Json(ProfileResponse {
        success: true,
        user: PublicProfile {
            id: user.id,
            name: user.name,
            bio: user.bio,
            avatar: user.avatar,
            verified: user.verified,
            followers: user.followers.len(),
            following: user.following.len(),
        },
        analytics,
        recent_writings,
    }))
}

pub async fn follow(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: AuthUser,
) -> Result<Json<FollowResponse>, ApiError> {
    if !state.store.follow_user(&auth.user_id, &id) {
        return Err(ApiError::BadRequest(
            "Unable to follow this account".to_string(),
        ));
    }

    info!("User {} now follows {}", auth.user_id, id);
    Ok(Json(FollowResponse { success: true }))
}

pub async fn unfollow(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: AuthUser,
) -> Result<Json<FollowResponse>, ApiError> {
    if !state.store.unfollow_user(&auth.user_id, &id) {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    info!("User {} unfollowed {}", auth.user_id, id);
    Ok(Json(FollowResponse { success: true }))
}
