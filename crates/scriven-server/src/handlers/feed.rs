//! Feed handlers

use crate::{error::ApiError, extractors::AuthUser, AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use scriven_types::{AuthorSummary, Writing};
use serde::{Deserialize, Serialize};

use crate::storage::store::DEFAULT_FOLLOWING_LIMIT;

/// Writings shown on the trending tab.
const TRENDING_FEED_SIZE: usize = 20;

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    success: bool,
    writings: Vec<FeedEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    #[serde(flatten)]
    writing: Writing,
    author: Option<AuthorSummary>,
}

pub async fn feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
    viewer: Option<AuthUser>,
) -> Result<Json<FeedResponse>, ApiError> {
    let writings = if query.kind.as_deref() == Some("following") {
        let viewer = viewer.ok_or_else(|| {
            ApiError::Unauthorized("Authentication required for following feed".to_string())
        })?;
        state
            .store
            .get_following_feed(&viewer.user_id, DEFAULT_FOLLOWING_LIMIT)
    } else {
        state.store.get_trending_writings(TRENDING_FEED_SIZE)
    };

    let writings = writings
        .into_iter()
        .map(|writing| {
            let author = state
                .store
                .get_user_by_id(&writing.author_id)
                .map(|u| AuthorSummary::from(&u));
            FeedEntry { writing, author }
        })
        .collect();

    Ok(Json(FeedResponse {
        success: true,
        writings,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{services::AuthService, storage::Store};
    use scriven_types::WritingDraft;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(Store::new()),
            auth_service: Arc::new(AuthService::new("test-secret".to_string())),
        }
    }

    #[tokio::test]
    async fn following_feed_requires_auth() {
        let state = test_state();
        let result = feed(
            State(state),
            Query(FeedQuery {
                kind: Some("following".to_string()),
            }),
            None,
        )
        .await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn trending_is_the_default_and_embeds_authors() {
        let state = test_state();
        let author = state
            .store
            .create_user("GOV111111", "a@x.com", "Jane", true, None, None);
        state.store.create_writing(
            &author.id,
            WritingDraft {
                title: "Hit".to_string(),
                content: "text".to_string(),
                is_public: true,
                ..WritingDraft::default()
            },
        );

        let Json(response) = feed(State(state), Query(FeedQuery { kind: None }), None)
            .await
            .unwrap();
        assert_eq!(response.writings.len(), 1);
        let entry_author = response.writings[0].author.as_ref().unwrap();
        assert_eq!(entry_author.name, "Jane");
    }

    #[tokio::test]
    async fn following_feed_only_shows_followed_authors() {
        let state = test_state();
        let reader = state
            .store
            .create_user("GOV111111", "a@x.com", "A", true, None, None);
        let followed = state
            .store
            .create_user("GOV222222", "b@x.com", "B", true, None, None);
        let stranger = state
            .store
            .create_user("GOV333333", "c@x.com", "C", true, None, None);
        state.store.follow_user(&reader.id, &followed.id);

        for (author, title) in [(&followed, "Followed"), (&stranger, "Stranger")] {
            state.store.create_writing(
                &author.id,
                WritingDraft {
                    title: title.to_string(),
                    content: "text".to_string(),
                    is_public: true,
                    ..WritingDraft::default()
                },
            );
        }

        let Json(response) = feed(
            State(state),
            Query(FeedQuery {
                kind: Some("following".to_string()),
            }),
            Some(AuthUser {
                user_id: reader.id.clone(),
                email: reader.email.clone(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.writings.len(), 1);
        assert_eq!(response.writings[0].writing.title, "Followed");
    }
}
