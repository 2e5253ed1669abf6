// src/presentation/http/controllers/users.rs
use crate::application::dto::UserDto;
use crate::application::users::{RegisterRequest, UserPatch};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequireViewer;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub user: RegisterFields,
}

#[derive(Debug, Deserialize)]
pub struct RegisterFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub user: LoginFields,
}

#[derive(Debug, Deserialize)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

/// Absent fields deserialize to empty strings, which the service treats
/// as "leave unchanged".
#[derive(Debug, Deserialize)]
pub struct UpdateUserBody {
    pub user: UpdateUserFields,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserFields {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserDto,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterBody>,
) -> HttpResult<Json<UserResponse>> {
    state
        .services
        .users
        .register(RegisterRequest {
            username: payload.user.username,
            email: payload.user.email,
            password: payload.user.password,
        })
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginBody>,
) -> HttpResult<Json<UserResponse>> {
    state
        .services
        .users
        .login(&payload.user.email, &payload.user.password)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}

pub async fn current_user(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
) -> HttpResult<Json<UserResponse>> {
    state
        .services
        .users
        .current_user(viewer)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}

pub async fn update_user(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
    Json(payload): Json<UpdateUserBody>,
) -> HttpResult<Json<UserResponse>> {
    state
        .services
        .users
        .update_user(
            viewer,
            UserPatch {
                email: payload.user.email,
                username: payload.user.username,
                password: payload.user.password,
                bio: payload.user.bio,
                image: payload.user.image,
            },
        )
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}
