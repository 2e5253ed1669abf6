// src/application/dto/users.rs
use crate::domain::user::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: String,
    pub image: String,
}

impl UserDto {
    pub fn from_user(user: User, token: String) -> Self {
        Self {
            email: user.email.into(),
            token,
            username: user.username.into(),
            bio: user.bio,
            image: user.image,
        }
    }
}
