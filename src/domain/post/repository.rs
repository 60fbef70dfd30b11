use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::filter::PostFilter;
use crate::domain::post::value_objects::PostId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
}

/// Every `*_published` method applies `is_published = true` and orders by
/// descending id.
#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    async fn count_published(&self, filter: &PostFilter) -> DomainResult<u64>;
    async fn list_published(
        &self,
        filter: &PostFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<Post>>;
}
