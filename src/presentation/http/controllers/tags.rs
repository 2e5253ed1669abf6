// src/presentation/http/controllers/tags.rs
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

pub async fn get_tags(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<TagsResponse>> {
    state
        .services
        .social
        .get_tags()
        .await
        .into_http()
        .map(|tags| Json(TagsResponse { tags }))
}
