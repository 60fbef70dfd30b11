use std::sync::Arc;

use crate::{
    application::{dto::SiteSetupDto, error::ApplicationResult},
    domain::site::SiteSetupRepository,
};

pub struct SiteQueryService {
    repo: Arc<dyn SiteSetupRepository>,
}

impl SiteQueryService {
    pub fn new(repo: Arc<dyn SiteSetupRepository>) -> Self {
        Self { repo }
    }

    /// The newest site setup, or `None` before one has been configured.
    pub async fn current(&self) -> ApplicationResult<Option<SiteSetupDto>> {
        Ok(self.repo.find_current().await?.map(Into::into))
    }
}
