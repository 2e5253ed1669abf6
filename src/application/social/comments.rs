// src/application/social/comments.rs
use super::articles::verify_author;
use super::service::SocialService;
use crate::application::auth::Viewer;
use crate::application::dto::CommentDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::comment::{CommentId, NewComment};

impl SocialService {
    pub async fn add_comment(
        &self,
        viewer: Viewer,
        slug: &str,
        body: String,
    ) -> ApplicationResult<CommentDto> {
        if body.trim().is_empty() {
            return Err(ApplicationError::validation("comment body cannot be empty"));
        }

        tracing::info!(slug, "add comment");
        let article = self.require_article(slug).await?;

        let comment = self
            .comments
            .insert(NewComment {
                body,
                article_id: article.id,
                author_id: viewer.id,
            })
            .await?;
        Ok(comment.into())
    }

    /// Ownership is checked against the comment's author, not the article's:
    /// a viewer may delete their own comment on someone else's article.
    pub async fn delete_comment(
        &self,
        viewer: Viewer,
        slug: &str,
        comment_id: i64,
    ) -> ApplicationResult<()> {
        tracing::info!(slug, comment_id, "delete comment");
        let article = self.require_article(slug).await?;

        let id = CommentId::new(comment_id)?;
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .filter(|comment| comment.article_id == article.id)
            .ok_or_else(|| ApplicationError::not_found("comment"))?;

        if !verify_author(comment.author.id, viewer.id) {
            return Err(ApplicationError::forbidden(
                "you are not the author of this comment",
            ));
        }

        self.comments.delete_by_id(id).await?;
        Ok(())
    }

    pub async fn get_comments(&self, slug: &str) -> ApplicationResult<Vec<CommentDto>> {
        let article = self.require_article(slug).await?;
        let comments = self.comments.list_by_article(article.id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
