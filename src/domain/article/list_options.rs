// src/domain/article/list_options.rs
use crate::domain::user::UserId;

/// Immutable listing configuration. The zero value means "no filter":
/// `limit == 0` is unbounded, `offset == 0` starts at the first row, empty
/// string filters are inactive and `viewer` is absent. Options are applied
/// through the `with_*` builders; each touches one field and is idempotent,
/// so application order does not matter. Out-of-range values are the query
/// executor's problem, not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: i64,
    pub offset: i64,
    pub tag: String,
    pub author: String,
    pub favorited_by: String,
    pub viewer: Option<UserId>,
}

/// The join-filter driving the general listing path. At most one is active;
/// `ListOptions::filter` picks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    Tag(String),
    Author(String),
    FavoritedBy(String),
    None,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_favorited_by(mut self, favorited_by: impl Into<String>) -> Self {
        self.favorited_by = favorited_by.into();
        self
    }

    pub fn with_viewer(mut self, viewer: UserId) -> Self {
        self.viewer = Some(viewer);
        self
    }

    /// Resolve which join-filter drives the listing. When more than one is
    /// set the precedence is tag > author > favorited-by, first match wins.
    /// That tie-break is inherited behavior, not a product requirement.
    pub fn filter(&self) -> ListFilter {
        if !self.tag.is_empty() {
            ListFilter::Tag(self.tag.clone())
        } else if !self.author.is_empty() {
            ListFilter::Author(self.author.clone())
        } else if !self.favorited_by.is_empty() {
            ListFilter::FavoritedBy(self.favorited_by.clone())
        } else {
            ListFilter::None
        }
    }
}
