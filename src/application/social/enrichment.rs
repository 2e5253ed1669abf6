// src/application/social/enrichment.rs
use super::service::SocialService;
use crate::application::dto::ArticleDto;
use crate::application::error::ApplicationResult;
use crate::domain::article::{Article, ArticleId};
use crate::domain::user::UserId;
use std::collections::HashMap;

impl SocialService {
    /// Batched favorite lookup for the viewer: one repository query per call
    /// no matter how many ids are passed. The result always contains every
    /// input id, defaulting to `false`; duplicates in the input collapse
    /// harmlessly. Without a viewer no query is issued and everything is
    /// `false`.
    pub async fn resolve_favorited(
        &self,
        ids: &[ArticleId],
        viewer: Option<UserId>,
    ) -> ApplicationResult<HashMap<ArticleId, bool>> {
        let mut map: HashMap<ArticleId, bool> = ids.iter().map(|id| (*id, false)).collect();
        if let Some(viewer) = viewer {
            for (id, favorited) in self.articles.favorited_map(ids, viewer).await? {
                map.insert(id, favorited);
            }
        }
        Ok(map)
    }

    /// Batched follow lookup for article authors, same contract as
    /// `resolve_favorited`.
    pub async fn resolve_following(
        &self,
        authors: &[UserId],
        viewer: Option<UserId>,
    ) -> ApplicationResult<HashMap<UserId, bool>> {
        let mut map: HashMap<UserId, bool> = authors.iter().map(|id| (*id, false)).collect();
        if let Some(viewer) = viewer {
            for (id, following) in self.articles.following_map(viewer, authors).await? {
                map.insert(id, following);
            }
        }
        Ok(map)
    }

    /// Attach the viewer-relative relationship facts to a page of articles.
    /// Two sequential batch lookups (favorited, then following); entities
    /// absent from a map are treated as `false`.
    pub(super) async fn enrich_articles(
        &self,
        articles: Vec<Article>,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let ids: Vec<ArticleId> = articles.iter().map(|article| article.id).collect();
        let authors: Vec<UserId> = articles.iter().map(|article| article.author.id).collect();

        let favorited = self.resolve_favorited(&ids, viewer).await?;
        let following = self.resolve_following(&authors, viewer).await?;

        Ok(articles
            .into_iter()
            .map(|article| {
                let is_favorited = favorited.get(&article.id).copied().unwrap_or(false);
                let follows_author = following.get(&article.author.id).copied().unwrap_or(false);
                ArticleDto::from_entity(article, is_favorited, follows_author)
            })
            .collect())
    }
}
