// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::user::{Profile, UserId};
use chrono::{DateTime, Utc};

/// Viewer-agnostic article as stored. Viewer-relative facts (`favorited`,
/// `author.following`) are computed per request and live on the response
/// DTOs, never here, so an entity can be shared or cached without leaking
/// one viewer's relationships to another.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub author: Profile,
    pub favorites_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub author_id: UserId,
}

/// Partial article update. `None` fields are left unchanged; a title change
/// always carries the re-derived slug with it.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            body: None,
            tag_list: None,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle, slug: ArticleSlug) -> Self {
        self.title = Some(title);
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_tag_list(mut self, tag_list: Vec<String>) -> Self {
        self.tag_list = Some(tag_list);
        self
    }
}
