// tests/support/builders.rs
use chrono::Utc;

use conduit_core::domain::article::*;
use conduit_core::domain::user::{Profile, UserId, Username};

pub fn profile(id: i64, username: &str) -> Profile {
    Profile {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        bio: String::new(),
        image: String::new(),
    }
}

pub struct ArticleBuilder {
    id: i64,
    slug: String,
    title: String,
    description: String,
    body: String,
    tag_list: Vec<String>,
    author: Profile,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            slug: "test-article".into(),
            title: "Test Article".into(),
            description: "about testing".into(),
            body: "Test body".into(),
            tag_list: vec![],
            author: profile(1, "anna"),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tag_list = tags.iter().map(|tag| (*tag).to_string()).collect();
        self
    }

    pub fn author(mut self, author: Profile) -> Self {
        self.author = author;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            description: self.description,
            body: self.body,
            tag_list: self.tag_list,
            author: self.author,
            favorites_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
