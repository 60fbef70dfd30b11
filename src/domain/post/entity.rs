// src/domain/post/entity.rs
use crate::domain::account::AccountId;
use crate::domain::post::value_objects::{PostContent, PostExcerpt, PostId, PostTitle};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{Category, CategoryId, Tag, TagId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub excerpt: PostExcerpt,
    pub content: PostContent,
    pub is_published: bool,
    pub cover: Option<String>,
    pub cover_in_post_content: bool,
    pub category: Option<Category>,
    /// Ordered by tag id.
    pub tags: Vec<Tag>,
    pub created_by: Option<AccountId>,
    pub updated_by: Option<AccountId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn first_tag(&self) -> Option<&Tag> {
        self.tags.first()
    }

    pub fn has_tag_slug(&self, slug: &str) -> bool {
        self.tags.iter().any(|tag| tag.slug.as_str() == slug)
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: Slug,
    pub excerpt: PostExcerpt,
    pub content: PostContent,
    pub is_published: bool,
    pub cover: Option<String>,
    pub cover_in_post_content: bool,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Vec<TagId>,
    pub created_by: Option<AccountId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial post mutation. Slugs are fixed once a post exists, so there is no
/// slug field.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub excerpt: Option<PostExcerpt>,
    pub content: Option<PostContent>,
    pub is_published: Option<bool>,
    pub cover: Option<Option<String>>,
    pub cover_in_post_content: Option<bool>,
    pub category_id: Option<Option<CategoryId>>,
    pub tag_ids: Option<Vec<TagId>>,
    pub updated_by: Option<AccountId>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            excerpt: None,
            content: None,
            is_published: None,
            cover: None,
            cover_in_post_content: None,
            category_id: None,
            tag_ids: None,
            updated_by: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_excerpt(mut self, excerpt: PostExcerpt) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }

    pub fn with_cover(mut self, cover: Option<String>) -> Self {
        self.cover = Some(cover);
        self
    }

    pub fn with_cover_in_post_content(mut self, value: bool) -> Self {
        self.cover_in_post_content = Some(value);
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_tags(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }

    pub fn with_updated_by(mut self, account: Option<AccountId>) -> Self {
        self.updated_by = account;
        self
    }
}
