// src/application/dto/comments.rs
use crate::application::dto::articles::ProfileDto;
use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: ProfileDto,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        // The viewer's follow relationship to the comment author is not
        // resolved anywhere today; `following` stays false. Known gap.
        Self {
            id: comment.id.into(),
            body: comment.body,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            author: ProfileDto::from_profile(comment.author, false),
        }
    }
}
