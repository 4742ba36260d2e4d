//! Writing handlers: CRUD, votes, shares, comments

use crate::{error::ApiError, extractors::AuthUser, AppState};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use scriven_types::{AuthorSummary, Comment, Template, VoteKind, Writing, WritingDraft, WritingPatch};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWritingRequest {
    title: Option<String>,
    content: Option<String>,
    template: Option<Template>,
    is_public: Option<bool>,
    background: Option<String>,
    font_family: Option<String>,
    color_grade: Option<String>,
    images: Option<Vec<String>>,
    links: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    author_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    vote_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingResponse {
    success: bool,
    writing: Writing,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingListResponse {
    success: bool,
    writings: Vec<Writing>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingDetailResponse {
    success: bool,
    writing: Writing,
    author: Option<AuthorSummary>,
    comments: Vec<CommentWithAuthor>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    comment: Comment,
    author: Option<AuthorSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    success: bool,
    upvotes: usize,
    downvotes: usize,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    success: bool,
    shares: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    success: bool,
    comment: CommentWithAuthor,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    success: bool,
    message: String,
}

pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateWritingRequest>,
) -> Result<Json<WritingResponse>, ApiError> {
    let (title, content) = match (req.title, req.content) {
        (Some(t), Some(c)) if !t.is_empty() && !c.is_empty() => (t, c),
        _ => {
            return Err(ApiError::BadRequest(
                "Title and content are required".to_string(),
            ))
        }
    };

    let draft = WritingDraft {
        title,
        content,
        template: req.template.unwrap_or_default(),
        is_public: req.is_public.unwrap_or(false),
        background: req.background,
        font_family: req.font_family,
        color_grade: req.color_grade,
        images: req.images,
        links: req.links,
    };

    let writing = state.store.create_writing(&auth.user_id, draft);
    info!("Writing {} created by {}", writing.id, auth.user_id);

    Ok(Json(WritingResponse {
        success: true,
        writing,
    }))
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    viewer: Option<AuthUser>,
) -> Result<Json<WritingListResponse>, ApiError> {
    let writings = match query.author_id {
        Some(author_id) => {
            let all = state.store.get_writings_by_author(&author_id);
            // Authors see their own drafts; everyone else only public work.
            let is_owner = viewer.map(|v| v.user_id == author_id).unwrap_or(false);
            if is_owner {
                all
            } else {
                all.into_iter().filter(|w| w.is_public).collect()
            }
        }
        None => state.store.get_public_writings(),
    };

    Ok(Json(WritingListResponse {
        success: true,
        writings,
    }))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
    viewer: Option<AuthUser>,
) -> Result<Json<WritingDetailResponse>, ApiError> {
    let writing = state
        .store
        .get_writing_by_id(&id)
        .ok_or_else(|| ApiError::NotFound("Writing not found".to_string()))?;

    let writing = if writing.is_public {
        // Public reads count as views; return the incremented record.
        state.store.increment_views(&id);
        state
            .store
            .get_writing_by_id(&id)
            .ok_or_else(|| ApiError::NotFound("Writing not found".to_string()))?
    } else {
        let viewer =
            viewer.ok_or_else(|| ApiError::Unauthorized("No token provided".to_string()))?;
        if viewer.user_id != writing.author_id {
            return Err(ApiError::Forbidden("Unauthorized".to_string()));
        }
        writing
    };

    let author = state
        .store
        .get_user_by_id(&writing.author_id)
        .map(|u| AuthorSummary::from(&u));

    let comments = state
        .store
        .get_comments_by_writing(&id)
        .into_iter()
        .map(|comment| {
            let author = state
                .store
                .get_user_by_id(&comment.author_id)
                .map(|u| AuthorSummary::from(&u));
            CommentWithAuthor { comment, author }
        })
        .collect();

    Ok(Json(WritingDetailResponse {
        success: true,
        writing,
        author,
        comments,
    }))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: AuthUser,
    Json(patch): Json<WritingPatch>,
) -> Result<Json<WritingResponse>, ApiError> {
    let writing = state
        .store
        .get_writing_by_id(&id)
        .ok_or_else(|| ApiError::NotFound("Writing not found".to_string()))?;

    if writing.author_id != auth.user_id {
        return Err(ApiError::Forbidden("Unauthorized".to_string()));
    }

    let updated = state
        .store
        .update_writing(&id, patch)
        .ok_or_else(|| ApiError::NotFound("Writing not found".to_string()))?;

    Ok(Json(WritingResponse {
        success: true,
        writing: updated,
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: AuthUser,
) -> Result<Json<DeleteResponse>, ApiError> {
    let writing = state
        .store
        .get_writing_by_id(&id)
        .ok_or_else(|| ApiError::NotFound("Writing not found".to_string()))?;

    if writing.author_id != auth.user_id {
        return Err(ApiError::Forbidden("Unauthorized".to_string()));
    }

    state.store.delete_writing(&id);
    info!("Writing {} deleted by {}", id, auth.user_id);

    Ok(Json(DeleteResponse {
        success: true,
        message: "Writing deleted successfully".to_string(),
    }))
}

pub async fn vote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: AuthUser,
    Json(req): Json<VoteRequest>,
) -> Result<Json<VoteResponse>, ApiError> {
    let kind = match req.vote_type.as_deref() {
        Some("up") => VoteKind::Up,
        Some("down") => VoteKind::Down,
        _ => return Err(ApiError::BadRequest("Invalid vote type".to_string())),
    };

    if !state.store.vote_writing(&id, &auth.user_id, kind) {
        return Err(ApiError::NotFound("Writing not found".to_string()));
    }

    let writing = state
        .store
        .get_writing_by_id(&id)
        .ok_or_else(|| ApiError::NotFound("Writing not found".to_string()))?;

    Ok(Json(VoteResponse {
        success: true,
        upvotes: writing.upvotes.len(),
        downvotes: writing.downvotes.len(),
    }))
}

pub async fn share(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShareResponse>, ApiError> {
    if state.store.get_writing_by_id(&id).is_none() {
        return Err(ApiError::NotFound("Writing not found".to_string()));
    }

    state.store.increment_shares(&id);

    let writing = state
        .store
        .get_writing_by_id(&id)
        .ok_or_else(|| ApiError::NotFound("Writing not found".to_string()))?;

    Ok(Json(ShareResponse {
        success: true,
        shares: writing.shares,
    }))
}

pub async fn comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: AuthUser,
    Json(req): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    let content = req.content.unwrap_or_default();
    let content = content.trim();
    if content.is_empty() {
        return Err(ApiError::BadRequest(
            "Comment content is required".to_string(),
        ));
    }

    if state.store.get_writing_by_id(&id).is_none() {
        return Err(ApiError::NotFound("Writing not found".to_string()));
    }

    let comment = state.store.create_comment(&id, &auth.user_id, content);
    let author = state
        .store
        .get_user_by_id(&auth.user_id)
        .map(|u| AuthorSummary::from(&u));

    Ok(Json(CommentResponse {
        success: true,
        comment: CommentWithAuthor { comment, author },
    }))
}
