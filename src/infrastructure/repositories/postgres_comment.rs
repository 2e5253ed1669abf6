// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Profile, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COMMENT: &str = "SELECT c.id, c.body, c.article_id, c.created_at, c.updated_at, \
     u.id AS author_id, u.username AS author_username, u.bio AS author_bio, \
     u.image AS author_image \
     FROM comments c JOIN users u ON u.id = c.author_id";

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    article_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_id: i64,
    author_username: String,
    author_bio: String,
    author_image: String,
}

impl CommentRow {
    fn into_comment(self) -> DomainResult<Comment> {
        Ok(Comment {
            id: CommentId::new(self.id)?,
            body: self.body,
            article_id: ArticleId::new(self.article_id)?,
            author: Profile {
                id: UserId::new(self.author_id)?,
                username: Username::new(self.author_username)?,
                bio: self.author_bio,
                image: self.author_image,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO comments (body, article_id, author_id) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&comment.body)
        .bind(i64::from(comment.article_id))
        .bind(i64::from(comment.author_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.find_by_id(CommentId::new(id)?)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted comment not readable".into()))
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let query = format!("{SELECT_COMMENT} WHERE c.id = $1");
        let row = sqlx::query_as::<_, CommentRow>(&query)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(CommentRow::into_comment).transpose()
    }

    async fn delete_by_id(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("comment"));
        }
        Ok(())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let query = format!("{SELECT_COMMENT} WHERE c.article_id = $1 ORDER BY c.created_at ASC");
        let rows = sqlx::query_as::<_, CommentRow>(&query)
            .bind(i64::from(article_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(CommentRow::into_comment).collect()
    }
}
