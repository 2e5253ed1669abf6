// tests/support/mocks/tag_repo.rs
use async_trait::async_trait;
use std::sync::Mutex;

use conduit_core::domain::errors::DomainResult;
use conduit_core::domain::tag::{Tag, TagRepository};

#[derive(Default)]
pub struct InMemoryTagRepo {
    tags: Mutex<Vec<String>>,
}

impl InMemoryTagRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, tags: &[&str]) {
        let mut stored = self.tags.lock().unwrap();
        stored.extend(tags.iter().map(|tag| (*tag).to_string()));
        stored.sort();
        stored.dedup();
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let tags = self.tags.lock().unwrap();
        Ok(tags.iter().cloned().map(Tag).collect())
    }
}
