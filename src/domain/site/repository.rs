use crate::domain::errors::DomainResult;
use crate::domain::site::entity::{NewSiteSetup, SiteSetup};
use async_trait::async_trait;

#[async_trait]
pub trait SiteSetupRepository: Send + Sync {
    async fn exists(&self) -> DomainResult<bool>;
    async fn insert(&self, setup: NewSiteSetup) -> DomainResult<SiteSetup>;
    /// Newest setup by id, if any.
    async fn find_current(&self) -> DomainResult<Option<SiteSetup>>;
}
