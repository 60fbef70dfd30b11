use crate::domain::errors::DomainResult;
use crate::domain::taxonomy::entity::{Category, NewCategory, NewTag, Tag};
use crate::domain::taxonomy::value_objects::{CategoryId, TagId};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
}
