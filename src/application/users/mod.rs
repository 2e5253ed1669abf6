// src/application/users/mod.rs
use std::sync::Arc;

use crate::application::auth::Viewer;
use crate::application::dto::{ProfileDto, UserDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::security::{PasswordHasher, TokenCodec};
use crate::domain::user::{
    Email, NewUser, ProfileRepository, UserId, UserRepository, UserUpdate, Username,
};

pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Partial account update; empty string fields are left unchanged.
#[derive(Default)]
pub struct UserPatch {
    pub email: String,
    pub username: String,
    pub password: String,
    pub bio: String,
    pub image: String,
}

/// Accounts and profiles: registration, login, the current-user view and
/// single-profile lookup.
pub struct UserService {
    users: Arc<dyn UserRepository>,
    profiles: Arc<dyn ProfileRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenCodec>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        profiles: Arc<dyn ProfileRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenCodec>,
    ) -> Self {
        Self {
            users,
            profiles,
            hasher,
            tokens,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> ApplicationResult<UserDto> {
        if request.password.is_empty() {
            return Err(ApplicationError::validation("password cannot be empty"));
        }
        let username = Username::new(request.username)?;
        let email = Email::new(request.email)?;

        let password_hash = self.hasher.hash(&request.password).await?;
        let user = self
            .users
            .insert(NewUser {
                email,
                username,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "registered user");
        let token = self.tokens.issue(user.id);
        Ok(UserDto::from_user(user, token))
    }

    pub async fn login(&self, email: &str, password: &str) -> ApplicationResult<UserDto> {
        // Reject obviously bad credentials before touching storage.
        if email.is_empty() {
            return Err(ApplicationError::validation("email cannot be empty"));
        }
        if password.is_empty() {
            return Err(ApplicationError::validation("password cannot be empty"));
        }

        let email = Email::new(email)?;
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user"))?;

        self.hasher
            .verify(password, &user.password_hash)
            .await
            .map_err(|_| ApplicationError::unauthorized("invalid password"))?;

        let token = self.tokens.issue(user.id);
        Ok(UserDto::from_user(user, token))
    }

    pub async fn current_user(&self, viewer: Viewer) -> ApplicationResult<UserDto> {
        let user = self
            .users
            .find_by_id(viewer.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user"))?;
        let token = self.tokens.issue(user.id);
        Ok(UserDto::from_user(user, token))
    }

    pub async fn update_user(&self, viewer: Viewer, patch: UserPatch) -> ApplicationResult<UserDto> {
        let mut update = UserUpdate::default();
        if !patch.email.is_empty() {
            update.email = Some(Email::new(patch.email)?);
        }
        if !patch.username.is_empty() {
            update.username = Some(Username::new(patch.username)?);
        }
        if !patch.password.is_empty() {
            update.password_hash = Some(self.hasher.hash(&patch.password).await?);
        }
        if !patch.bio.is_empty() {
            update.bio = Some(patch.bio);
        }
        if !patch.image.is_empty() {
            update.image = Some(patch.image);
        }

        let user = self.users.update(viewer.id, update).await?;
        let token = self.tokens.issue(user.id);
        Ok(UserDto::from_user(user, token))
    }

    /// Single-profile lookup. The collaborator precomputes `following` for
    /// this one case; list paths use the batch resolver instead.
    pub async fn get_profile(
        &self,
        username: &str,
        viewer: Option<UserId>,
    ) -> ApplicationResult<ProfileDto> {
        let username = Username::new(username)?;
        let view = self
            .profiles
            .find_by_username(&username, viewer)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile"))?;
        Ok(ProfileDto::from_profile(view.profile, view.following))
    }
}
