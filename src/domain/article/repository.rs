use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::list_options::ListOptions;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete_by_slug(&self, slug: &ArticleSlug) -> DomainResult<()>;

    /// General listing path, driven by `options.filter()`.
    async fn list(&self, options: &ListOptions) -> DomainResult<Vec<Article>>;
    /// Feed path: only articles whose author is followed by `options.viewer`.
    /// Ignores the tag/author/favorited-by filters entirely.
    async fn feed(&self, options: &ListOptions) -> DomainResult<Vec<Article>>;

    /// Record a favorite. Idempotent: favoriting an already-favorited article
    /// is a no-op.
    async fn favorite(&self, article: ArticleId, user: UserId) -> DomainResult<()>;
    /// Remove a favorite. Fails with `DomainError::NotFound` when no favorite
    /// row exists for the pair.
    async fn unfavorite(&self, article: ArticleId, user: UserId) -> DomainResult<()>;

    /// Batched favorite lookup: one underlying query regardless of the number
    /// of ids. Only ids with a favorite row need to appear in the result; the
    /// caller fills in the rest as `false`.
    async fn favorited_map(
        &self,
        ids: &[ArticleId],
        viewer: UserId,
    ) -> DomainResult<HashMap<ArticleId, bool>>;

    /// Batched follow lookup for article authors, same contract as
    /// `favorited_map`.
    async fn following_map(
        &self,
        viewer: UserId,
        authors: &[UserId],
    ) -> DomainResult<HashMap<UserId, bool>>;
}
