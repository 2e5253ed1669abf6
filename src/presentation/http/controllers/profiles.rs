// src/presentation/http/controllers/profiles.rs
use crate::application::dto::ProfileDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeViewer;
use crate::presentation::http::state::HttpState;
use axum::{extract::Path, Extension, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: ProfileDto,
}

pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    MaybeViewer(viewer): MaybeViewer,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .users
        .get_profile(&username, viewer.map(|v| v.id))
        .await
        .into_http()
        .map(|profile| Json(ProfileResponse { profile }))
}
