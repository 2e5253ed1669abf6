// src/application/social/articles.rs
use super::service::SocialService;
use crate::application::auth::Viewer;
use crate::application::dto::ArticleDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::{
    Article, ArticleSlug, ArticleTitle, ArticleUpdate, ListOptions, NewArticle,
};
use crate::domain::user::UserId;

/// The single ownership predicate. Every mutating article path routes
/// through this before persisting.
pub fn verify_author(author: UserId, viewer: UserId) -> bool {
    viewer == author
}

fn ensure_author(author: UserId, viewer: UserId) -> ApplicationResult<()> {
    if verify_author(author, viewer) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "you are not the author of this article",
        ))
    }
}

pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

/// Partial update request. Empty strings and empty tag lists mean "leave
/// unchanged", never "clear".
#[derive(Default)]
pub struct ArticlePatch {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl SocialService {
    pub async fn create_article(
        &self,
        viewer: Viewer,
        draft: ArticleDraft,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(draft.title)?;
        let slug = ArticleSlug::new(self.slugger.slugify(title.as_str()))?;
        tracing::info!(slug = %slug, "create article");

        let created = self
            .articles
            .insert(NewArticle {
                slug,
                title,
                description: draft.description,
                body: draft.body,
                tag_list: draft.tag_list,
                author_id: viewer.id,
            })
            .await?;

        // A freshly created article cannot be favorited yet and self-follow
        // is meaningless; no enrichment query is spent on it.
        Ok(ArticleDto::from_entity(created, false, false))
    }

    pub async fn get_article(&self, slug: &str) -> ApplicationResult<ArticleDto> {
        let article = self.require_article(slug).await?;
        Ok(ArticleDto::from_entity(article, false, false))
    }

    pub async fn update_article(
        &self,
        viewer: Viewer,
        slug: &str,
        patch: ArticlePatch,
    ) -> ApplicationResult<ArticleDto> {
        tracing::info!(slug, "update article");
        let article = self.require_article(slug).await?;
        ensure_author(article.author.id, viewer.id)?;

        let mut update = ArticleUpdate::new(article.id);
        if !patch.title.is_empty() {
            let title = ArticleTitle::new(patch.title)?;
            let slug = ArticleSlug::new(self.slugger.slugify(title.as_str()))?;
            update = update.with_title(title, slug);
        }
        if !patch.description.is_empty() {
            update = update.with_description(patch.description);
        }
        if !patch.body.is_empty() {
            update = update.with_body(patch.body);
        }
        if !patch.tag_list.is_empty() {
            update = update.with_tag_list(patch.tag_list);
        }

        let updated = self.articles.update(update).await?;

        let favorited = self
            .resolve_favorited(&[updated.id], Some(viewer.id))
            .await?;
        let is_favorited = favorited.get(&updated.id).copied().unwrap_or(false);
        Ok(ArticleDto::from_entity(updated, is_favorited, false))
    }

    pub async fn delete_article(&self, viewer: Viewer, slug: &str) -> ApplicationResult<()> {
        tracing::info!(slug, "delete article");
        let article = self.require_article(slug).await?;
        ensure_author(article.author.id, viewer.id)?;
        // Comments and favorite rows cascade with the article in storage.
        self.articles.delete_by_slug(&article.slug).await?;
        Ok(())
    }

    pub async fn favorite_article(
        &self,
        viewer: Viewer,
        slug: &str,
    ) -> ApplicationResult<ArticleDto> {
        tracing::info!(slug, "favorite article");
        let article = self.require_article(slug).await?;

        self.articles.favorite(article.id, viewer.id).await?;
        self.reload_for_viewer(article.id, viewer.id).await
    }

    pub async fn unfavorite_article(
        &self,
        viewer: Viewer,
        slug: &str,
    ) -> ApplicationResult<ArticleDto> {
        tracing::info!(slug, "unfavorite article");
        let article = self.require_article(slug).await?;

        self.articles.unfavorite(article.id, viewer.id).await?;
        self.reload_for_viewer(article.id, viewer.id).await
    }

    pub async fn list_articles(&self, options: ListOptions) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.articles.list(&options).await?;
        self.enrich_articles(articles, options.viewer).await
    }

    /// Articles from followed authors only. An absent viewer follows nobody
    /// and gets an empty feed rather than an error.
    pub async fn feed_articles(&self, options: ListOptions) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.articles.feed(&options).await?;
        self.enrich_articles(articles, options.viewer).await
    }

    pub(super) async fn require_article(&self, slug: &str) -> ApplicationResult<Article> {
        let slug = ArticleSlug::new(slug)?;
        self.articles
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article"))
    }

    /// Re-read an article after a favorite mutation. The favorites count is
    /// recomputed from the relationship table by the read, and `favorited`
    /// is resolved specifically for the acting viewer. A failure here is not
    /// compensated: the mutation stays.
    async fn reload_for_viewer(
        &self,
        id: crate::domain::article::ArticleId,
        viewer: UserId,
    ) -> ApplicationResult<ArticleDto> {
        let article = self
            .articles
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article"))?;

        let favorited = self.resolve_favorited(&[article.id], Some(viewer)).await?;
        let is_favorited = favorited.get(&article.id).copied().unwrap_or(false);
        Ok(ArticleDto::from_entity(article, is_favorited, false))
    }
}
