pub mod articles;
pub mod comments;
pub mod enrichment;
pub mod service;
pub mod tags;

pub use articles::{verify_author, ArticleDraft, ArticlePatch};
pub use service::SocialService;
