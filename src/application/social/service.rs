// src/application/social/service.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::ArticleRepository;
use crate::domain::comment::CommentRepository;
use crate::domain::tag::TagRepository;

/// Content & social-graph orchestrator: article, comment and tag operations,
/// ownership enforcement on mutations, and viewer-relative enrichment.
pub struct SocialService {
    pub(super) articles: Arc<dyn ArticleRepository>,
    pub(super) comments: Arc<dyn CommentRepository>,
    pub(super) tags: Arc<dyn TagRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
}

impl SocialService {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        comments: Arc<dyn CommentRepository>,
        tags: Arc<dyn TagRepository>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            articles,
            comments,
            tags,
            slugger,
        }
    }
}
