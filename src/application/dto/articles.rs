// src/application/dto/articles.rs
use crate::domain::article::Article;
use crate::domain::user::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Viewer-relative author view. `following` is computed per request; the
/// domain `Profile` never carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDto {
    pub username: String,
    pub bio: String,
    pub image: String,
    pub following: bool,
}

impl ProfileDto {
    pub fn from_profile(profile: Profile, following: bool) -> Self {
        Self {
            username: profile.username.into(),
            bio: profile.bio,
            image: profile.image,
            following,
        }
    }
}

/// Viewer-relative article view built per request. Owns the derived
/// `favorited` / `author.following` facts for exactly one response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: u32,
    pub author: ProfileDto,
}

impl ArticleDto {
    pub fn from_entity(article: Article, favorited: bool, following: bool) -> Self {
        Self {
            slug: article.slug.into(),
            title: article.title.into(),
            description: article.description,
            body: article.body,
            tag_list: article.tag_list,
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited,
            favorites_count: article.favorites_count,
            author: ProfileDto::from_profile(article.author, following),
        }
    }
}
