pub mod entity;
pub mod list_options;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use list_options::{ListFilter, ListOptions};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleId, ArticleSlug, ArticleTitle};
