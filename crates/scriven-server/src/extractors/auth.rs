//! Auth extractor for protected routes

use crate::{error::ApiError, AppState};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Authenticated user info, extracted from the bearer token.
///
/// Handlers that take an `AuthUser` argument reject unauthenticated
/// requests before running; `Option<AuthUser>` makes auth optional.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("No token provided".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization format".to_string()))?;

        let identity = state
            .auth_service
            .verify_token(token)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(AuthUser {
            user_id: identity.user_id,
            email: identity.email,
        })
    }
}
