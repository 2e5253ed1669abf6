// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use chrono::Utc;

use conduit_core::application::ports::security::TokenCodec;
use conduit_core::application::services::ApplicationServices;
use conduit_core::application::social::SocialService;
use conduit_core::application::users::UserService;
use conduit_core::domain::user::{Email, User, UserId, Username};
use conduit_core::infrastructure::security::HmacTokenCodec;
use conduit_core::infrastructure::util::DefaultSlugGenerator;
use conduit_core::presentation::http::{routes::build_router, state::HttpState};

use super::builders::{profile, ArticleBuilder};
use super::mocks::{
    InMemoryArticleRepo, InMemoryCommentRepo, InMemoryProfileRepo, InMemoryTagRepo,
    InMemoryUserRepo, PlainPasswordHasher,
};

pub const TEST_SECRET: &str = "integration-test-secret-integration-test-secret";

pub fn auth_token(id: i64) -> String {
    HmacTokenCodec::new(TEST_SECRET).issue(UserId::new(id).unwrap())
}

pub fn make_social_service(
    articles: Arc<InMemoryArticleRepo>,
    comments: Arc<InMemoryCommentRepo>,
    tags: Arc<InMemoryTagRepo>,
) -> SocialService {
    SocialService::new(articles, comments, tags, Arc::new(DefaultSlugGenerator))
}

pub fn make_user_service(
    users: Arc<InMemoryUserRepo>,
    profiles: Arc<InMemoryProfileRepo>,
) -> UserService {
    UserService::new(
        users,
        profiles,
        Arc::new(PlainPasswordHasher),
        Arc::new(HmacTokenCodec::new(TEST_SECRET)),
    )
}

pub fn make_user(id: i64, username: &str, email: &str, password: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        email: Email::new(email).unwrap(),
        username: Username::new(username).unwrap(),
        bio: String::new(),
        image: String::new(),
        password_hash: format!("hashed:{password}"),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Full router over in-memory storage, seeded with one user ("anna",
/// password "secret") and one of her articles.
pub fn make_test_router() -> Router {
    let anna = profile(1, "anna");

    let article_repo = Arc::new(InMemoryArticleRepo::new());
    article_repo.seed_author(anna.clone());
    article_repo.seed_article(
        ArticleBuilder::new()
            .id(1)
            .slug("how-to-train-your-dragon")
            .title("How to Train Your Dragon")
            .author(anna.clone())
            .tags(&["dragons", "training"])
            .build(),
    );

    let comment_repo = Arc::new(InMemoryCommentRepo::new());
    comment_repo.seed_author(anna.clone());

    let tag_repo = Arc::new(InMemoryTagRepo::new());
    tag_repo.seed(&["dragons", "training"]);

    let user_repo = Arc::new(InMemoryUserRepo::new());
    user_repo.seed_user(make_user(1, "anna", "anna@example.com", "secret"));

    let profile_repo = Arc::new(InMemoryProfileRepo::new());
    profile_repo.seed_profile(anna);

    let services = Arc::new(ApplicationServices::new(
        article_repo,
        comment_repo,
        tag_repo,
        user_repo,
        profile_repo,
        Arc::new(PlainPasswordHasher),
        Arc::new(HmacTokenCodec::new(TEST_SECRET)),
        Arc::new(DefaultSlugGenerator),
    ));

    build_router(HttpState { services })
}
