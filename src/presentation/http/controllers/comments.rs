// src/presentation/http/controllers/comments.rs
use crate::application::dto::CommentDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequireViewer;
use crate::presentation::http::state::HttpState;
use axum::{
    extract::Path,
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddCommentBody {
    pub comment: AddCommentFields,
}

#[derive(Debug, Deserialize)]
pub struct AddCommentFields {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentDto>,
}

pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
    Path(slug): Path<String>,
    Json(payload): Json<AddCommentBody>,
) -> HttpResult<Json<CommentResponse>> {
    state
        .services
        .social
        .add_comment(viewer, &slug, payload.comment.body)
        .await
        .into_http()
        .map(|comment| Json(CommentResponse { comment }))
}

pub async fn get_comments(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CommentsResponse>> {
    state
        .services
        .social
        .get_comments(&slug)
        .await
        .into_http()
        .map(|comments| Json(CommentsResponse { comments }))
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
    Path((slug, id)): Path<(String, i64)>,
) -> HttpResult<StatusCode> {
    state
        .services
        .social
        .delete_comment(viewer, &slug, id)
        .await
        .into_http()?;
    Ok(StatusCode::OK)
}
