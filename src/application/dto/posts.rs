use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CategoryDto, PageMeta, Paginated, TagDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub is_published: bool,
    #[serde(default)]
    pub cover: Option<String>,
    pub cover_in_post_content: bool,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    pub tags: Vec<TagDto>,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub updated_by: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            excerpt: post.excerpt.into_inner(),
            content: post.content.into_inner(),
            is_published: post.is_published,
            cover: post.cover,
            cover_in_post_content: post.cover_in_post_content,
            category: post.category.map(Into::into),
            tags: post.tags.into_iter().map(Into::into).collect(),
            created_by: post.created_by.map(Into::into),
            updated_by: post.updated_by.map(Into::into),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// One page of a post listing plus the label describing its filter.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostListingDto {
    pub title: String,
    pub items: Vec<PostDto>,
    pub page: PageMeta,
}

impl PostListingDto {
    pub fn new(title: impl Into<String>, page: Paginated<Post>) -> Self {
        let page = page.map(PostDto::from);
        Self {
            title: title.into(),
            items: page.items,
            page: page.window.into(),
        }
    }
}
