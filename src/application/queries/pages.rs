use std::sync::Arc;

use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{page::PageReadRepository, slug::Slug},
};

pub struct GetPageBySlugQuery {
    pub slug: String,
}

pub struct PageQueryService {
    read_repo: Arc<dyn PageReadRepository>,
}

impl PageQueryService {
    pub fn new(read_repo: Arc<dyn PageReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn get_page_by_slug(&self, query: GetPageBySlugQuery) -> ApplicationResult<PageDto> {
        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("page not found"))?;
        let page = self
            .read_repo
            .find_published_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;
        Ok(page.into())
    }
}
