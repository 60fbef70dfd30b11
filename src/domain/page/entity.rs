// src/domain/page/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{PostContent, PostTitle};
use crate::domain::slug::Slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub i64);

impl PageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("page id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PageId> for i64 {
    fn from(value: PageId) -> Self {
        value.0
    }
}

/// Standalone static content. Shares title and body rules with posts.
#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub title: PostTitle,
    pub slug: Slug,
    pub is_published: bool,
    pub content: PostContent,
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: PostTitle,
    pub slug: Slug,
    pub is_published: bool,
    pub content: PostContent,
}

#[derive(Debug, Clone)]
pub struct PageUpdate {
    pub id: PageId,
    pub title: Option<PostTitle>,
    pub is_published: Option<bool>,
    pub content: Option<PostContent>,
}

impl PageUpdate {
    pub fn new(id: PageId) -> Self {
        Self {
            id,
            title: None,
            is_published: None,
            content: None,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }
}
