// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub username: Username,
    pub bio: String,
    pub image: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub username: Username,
    pub password_hash: String,
}

/// Partial user update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub email: Option<Email>,
    pub username: Option<Username>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub password_hash: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.bio.is_none()
            && self.image.is_none()
            && self.password_hash.is_none()
    }
}

/// Viewer-agnostic author identity attached to articles and comments.
/// The viewer-relative `following` fact never lives here; it belongs to the
/// response DTOs built per request.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: UserId,
    pub username: Username,
    pub bio: String,
    pub image: String,
}

/// Single-profile lookup result. `following` is precomputed by the
/// collaborator for this one case only (see ProfileRepository).
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: Profile,
    pub following: bool,
}
