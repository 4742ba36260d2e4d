//! Authentication handlers

use crate::{error::ApiError, extractors::AuthUser, AppState};
use axum::{extract::State, Json};
use scriven_core::validation::{validate_email, validate_gov_id};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    gov_id: Option<String>,
    email: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    gov_id: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    success: bool,
    token: String,
    user: UserInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    id: String,
    name: String,
    email: String,
    verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    success: bool,
    user: ProfileInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    id: String,
    name: String,
    email: String,
    verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
    followers: usize,
    following: usize,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (gov_id, email, name) = match (req.gov_id, req.email, req.name) {
        (Some(g), Some(e), Some(n)) if !g.is_empty() && !e.is_empty() && !n.is_empty() => {
            (g, e, n)
        }
        _ => {
            return Err(ApiError::BadRequest(
                "Government ID, email, and name are required".to_string(),
            ))
        }
    };

    info!("Registration attempt for: {}", email);

    if !validate_gov_id(&gov_id) {
        return Err(ApiError::BadRequest(
            "Invalid government ID format. Use format: GOV123456".to_string(),
        ));
    }
    if !validate_email(&email) {
        return Err(ApiError::BadRequest("Invalid email format".to_string()));
    }

    if state.store.get_user_by_gov_id(&gov_id).is_some() {
        return Err(ApiError::Conflict(
            "User with this government ID already exists".to_string(),
        ));
    }
    if state.store.get_user_by_email(&email).is_some() {
        return Err(ApiError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    // New accounts are verified immediately; there is no review queue.
    let user = state
        .store
        .create_user(&gov_id, &email, &name, true, None, None);

    let token = state
        .auth_service
        .issue_token(&user.id, &user.email)
        .map_err(|e| {
            error!("Token issuance failed: {}", e);
            ApiError::Internal(e.to_string())
        })?;

    info!("Registration successful for: {}", email);

    Ok(Json(AuthResponse {
        success: true,
        token,
        user: UserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
            verified: user.verified,
            bio: None,
            avatar: None,
        },
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (gov_id, email) = match (req.gov_id, req.email) {
        (Some(g), Some(e)) if !g.is_empty() && !e.is_empty() => (g, e),
        _ => {
            return Err(ApiError::BadRequest(
                "Government ID and email are required".to_string(),
            ))
        }
    };

    info!("Login attempt for: {}", gov_id);

    if !validate_gov_id(&gov_id) {
        return Err(ApiError::BadRequest(
            "Invalid government ID format".to_string(),
        ));
    }

    let user = state.store.get_user_by_gov_id(&gov_id).ok_or_else(|| {
        ApiError::NotFound("User not found. Please register first.".to_string())
    })?;

    if user.email != email {
        return Err(ApiError::Unauthorized(
            "Email does not match government ID".to_string(),
        ));
    }

    let token = state
        .auth_service
        .issue_token(&user.id, &user.email)
        .map_err(|e| {
            error!("Token issuance failed: {}", e);
            ApiError::Internal(e.to_string())
        })?;

    info!("Login successful for: {}", user.email);

    Ok(Json(AuthResponse {
        success: true,
        token,
        user: UserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
            verified: user.verified,
            bio: user.bio,
            avatar: user.avatar,
        },
    }))
}

pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MeResponse>, ApiError> {
    let user = state
        .store
        .get_user_by_id(&auth.user_id)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(MeResponse {
        success: true,
        user: ProfileInfo {
            id: user.id,
            name: user.name,
            email: user.email,
            verified: user.verified,
            bio: user.bio,
            avatar: user.avatar,
            followers: user.followers.len(),
            following: user.following.len(),
        },
    }))
}
