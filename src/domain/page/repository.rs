use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{NewPage, Page, PageUpdate};
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait PageWriteRepository: Send + Sync {
    async fn insert(&self, page: NewPage) -> DomainResult<Page>;
    async fn update(&self, update: PageUpdate) -> DomainResult<Page>;
}

#[async_trait]
pub trait PageReadRepository: Send + Sync {
    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>>;
}
