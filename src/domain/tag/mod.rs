// src/domain/tag/mod.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(pub String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Tag>>;
}
