// tests/support/mocks/mod.rs
pub mod article_repo;
pub mod comment_repo;
pub mod security;
pub mod tag_repo;
pub mod user_repo;

pub use article_repo::InMemoryArticleRepo;
pub use comment_repo::InMemoryCommentRepo;
pub use security::PlainPasswordHasher;
pub use tag_repo::InMemoryTagRepo;
pub use user_repo::{InMemoryProfileRepo, InMemoryUserRepo};
