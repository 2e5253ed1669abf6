// src/application/social/tags.rs
use super::service::SocialService;
use crate::application::error::ApplicationResult;

impl SocialService {
    pub async fn get_tags(&self) -> ApplicationResult<Vec<String>> {
        let tags = self.tags.list().await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }
}
