// tests/support/mocks/article_repo.rs
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use conduit_core::domain::article::{
    Article, ArticleId, ArticleRepository, ArticleSlug, ArticleUpdate, ListFilter, ListOptions,
    NewArticle,
};
use conduit_core::domain::errors::{DomainError, DomainResult};
use conduit_core::domain::user::{Profile, UserId};

#[derive(Default)]
struct ArticleState {
    next_id: i64,
    articles: Vec<Article>,
    authors: HashMap<i64, Profile>,
    /// (user_id, article_id)
    favorites: HashSet<(i64, i64)>,
    /// (follower_id, followee_id)
    follows: HashSet<(i64, i64)>,
}

/// In-memory article store. Favorites counts are derived from the favorites
/// set on every read, and the batch lookups count their invocations so tests
/// can assert on query budgets.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    state: Mutex<ArticleState>,
    pub favorited_calls: AtomicUsize,
    pub following_calls: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_author(&self, author: Profile) {
        let mut state = self.state.lock().unwrap();
        state.authors.insert(i64::from(author.id), author);
    }

    pub fn seed_article(&self, article: Article) {
        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(i64::from(article.id));
        state
            .authors
            .insert(i64::from(article.author.id), article.author.clone());
        state.articles.push(article);
    }

    pub fn seed_follow(&self, follower: UserId, followee: UserId) {
        let mut state = self.state.lock().unwrap();
        state
            .follows
            .insert((i64::from(follower), i64::from(followee)));
    }

    pub fn seed_favorite(&self, user: UserId, article: ArticleId) {
        let mut state = self.state.lock().unwrap();
        state
            .favorites
            .insert((i64::from(user), i64::from(article)));
    }

    pub fn favorites_count_of(&self, article: ArticleId) -> usize {
        let state = self.state.lock().unwrap();
        count_favorites(&state, article)
    }

    pub fn stored_title(&self, id: ArticleId) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .articles
            .iter()
            .find(|article| article.id == id)
            .map(|article| article.title.as_str().to_owned())
    }
}

fn count_favorites(state: &ArticleState, article: ArticleId) -> usize {
    let id = i64::from(article);
    state
        .favorites
        .iter()
        .filter(|(_, article_id)| *article_id == id)
        .count()
}

fn with_live_count(state: &ArticleState, article: &Article) -> Article {
    let mut article = article.clone();
    article.favorites_count = u32::try_from(count_favorites(state, article.id)).unwrap();
    article
}

fn page(mut articles: Vec<Article>, options: &ListOptions) -> Vec<Article> {
    articles.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then(i64::from(b.id).cmp(&i64::from(a.id)))
    });
    let offset = usize::try_from(options.offset.max(0)).unwrap();
    let iter = articles.into_iter().skip(offset);
    if options.limit > 0 {
        iter.take(usize::try_from(options.limit).unwrap()).collect()
    } else {
        iter.collect()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let author = state
            .authors
            .get(&i64::from(article.author_id))
            .cloned()
            .ok_or_else(|| DomainError::not_found("author"))?;
        if state
            .articles
            .iter()
            .any(|existing| existing.slug == article.slug)
        {
            return Err(DomainError::conflict("article slug"));
        }

        state.next_id += 1;
        let now = Utc::now();
        let stored = Article {
            id: ArticleId::new(state.next_id)?,
            slug: article.slug,
            title: article.title,
            description: article.description,
            body: article.body,
            tag_list: article.tag_list,
            author,
            favorites_count: 0,
            created_at: now,
            updated_at: now,
        };
        state.articles.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|article| &article.slug == slug)
            .map(|article| with_live_count(&state, article)))
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|article| article.id == id)
            .map(|article| with_live_count(&state, article)))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        // A re-derived slug must stay unique across the other articles.
        if let Some(slug) = &update.slug {
            let taken = state
                .articles
                .iter()
                .any(|existing| existing.id != update.id && &existing.slug == slug);
            if taken {
                return Err(DomainError::conflict("article slug"));
            }
        }
        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::not_found("article"))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(description) = update.description {
            article.description = description;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        if let Some(tag_list) = update.tag_list {
            article.tag_list = tag_list;
        }
        article.updated_at = Utc::now();

        let updated = article.clone();
        Ok(with_live_count(&state, &updated))
    }

    async fn delete_by_slug(&self, slug: &ArticleSlug) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|article| &article.slug != slug);
        if state.articles.len() == before {
            return Err(DomainError::not_found("article"));
        }
        Ok(())
    }

    async fn list(&self, options: &ListOptions) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let matches: Vec<Article> = state
            .articles
            .iter()
            .filter(|article| match options.filter() {
                ListFilter::Tag(tag) => article.tag_list.contains(&tag),
                ListFilter::Author(author) => article.author.username.as_str() == author,
                ListFilter::FavoritedBy(favorited_by) => state
                    .authors
                    .values()
                    .find(|profile| profile.username.as_str() == favorited_by)
                    .is_some_and(|profile| {
                        state
                            .favorites
                            .contains(&(i64::from(profile.id), i64::from(article.id)))
                    }),
                ListFilter::None => true,
            })
            .map(|article| with_live_count(&state, article))
            .collect();
        Ok(page(matches, options))
    }

    async fn feed(&self, options: &ListOptions) -> DomainResult<Vec<Article>> {
        let Some(viewer) = options.viewer else {
            return Ok(Vec::new());
        };
        let state = self.state.lock().unwrap();
        let matches: Vec<Article> = state
            .articles
            .iter()
            .filter(|article| {
                state
                    .follows
                    .contains(&(i64::from(viewer), i64::from(article.author.id)))
            })
            .map(|article| with_live_count(&state, article))
            .collect();
        Ok(page(matches, options))
    }

    async fn favorite(&self, article: ArticleId, user: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .favorites
            .insert((i64::from(user), i64::from(article)));
        Ok(())
    }

    async fn unfavorite(&self, article: ArticleId, user: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if !state.favorites.remove(&(i64::from(user), i64::from(article))) {
            return Err(DomainError::not_found("favorite"));
        }
        Ok(())
    }

    async fn favorited_map(
        &self,
        ids: &[ArticleId],
        viewer: UserId,
    ) -> DomainResult<HashMap<ArticleId, bool>> {
        self.favorited_calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(ids
            .iter()
            .filter(|id| {
                state
                    .favorites
                    .contains(&(i64::from(viewer), i64::from(**id)))
            })
            .map(|id| (*id, true))
            .collect())
    }

    async fn following_map(
        &self,
        viewer: UserId,
        authors: &[UserId],
    ) -> DomainResult<HashMap<UserId, bool>> {
        self.following_calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(authors
            .iter()
            .filter(|author| {
                state
                    .follows
                    .contains(&(i64::from(viewer), i64::from(**author)))
            })
            .map(|author| (*author, true))
            .collect())
    }
}
