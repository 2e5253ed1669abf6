// tests/support/mocks/comment_repo.rs
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

use conduit_core::domain::article::ArticleId;
use conduit_core::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use conduit_core::domain::errors::{DomainError, DomainResult};
use conduit_core::domain::user::Profile;

#[derive(Default)]
struct CommentState {
    next_id: i64,
    comments: Vec<Comment>,
    authors: HashMap<i64, Profile>,
}

#[derive(Default)]
pub struct InMemoryCommentRepo {
    state: Mutex<CommentState>,
}

impl InMemoryCommentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_author(&self, author: Profile) {
        let mut state = self.state.lock().unwrap();
        state.authors.insert(i64::from(author.id), author);
    }

    pub fn seed_comment(&self, comment: Comment) {
        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(i64::from(comment.id));
        state
            .authors
            .insert(i64::from(comment.author.id), comment.author.clone());
        state.comments.push(comment);
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        let author = state
            .authors
            .get(&i64::from(comment.author_id))
            .cloned()
            .ok_or_else(|| DomainError::not_found("author"))?;

        state.next_id += 1;
        let now = Utc::now();
        let stored = Comment {
            id: CommentId::new(state.next_id)?,
            body: comment.body,
            article_id: comment.article_id,
            author,
            created_at: now,
            updated_at: now,
        };
        state.comments.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .find(|comment| comment.id == id)
            .cloned())
    }

    async fn delete_by_id(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.comments.len();
        state.comments.retain(|comment| comment.id != id);
        if state.comments.len() == before {
            return Err(DomainError::not_found("comment"));
        }
        Ok(())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect())
    }
}
