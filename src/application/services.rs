// src/application/services.rs
use std::sync::Arc;

use crate::application::auth::{AuthPolicy, AuthResolver};
use crate::application::ports::{
    security::{PasswordHasher, TokenCodec},
    util::SlugGenerator,
};
use crate::application::social::SocialService;
use crate::application::users::UserService;
use crate::domain::article::ArticleRepository;
use crate::domain::comment::CommentRepository;
use crate::domain::tag::TagRepository;
use crate::domain::user::{ProfileRepository, UserRepository};

pub struct ApplicationServices {
    pub social: Arc<SocialService>,
    pub users: Arc<UserService>,
    pub auth: Arc<AuthResolver>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        tag_repo: Arc<dyn TagRepository>,
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_codec: Arc<dyn TokenCodec>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let social = Arc::new(SocialService::new(
            article_repo,
            comment_repo,
            tag_repo,
            slugger,
        ));
        let users = Arc::new(UserService::new(
            user_repo,
            profile_repo,
            password_hasher,
            Arc::clone(&token_codec),
        ));
        let auth = Arc::new(AuthResolver::new(token_codec, AuthPolicy::conduit()));

        Self {
            social,
            users,
            auth,
        }
    }
}
