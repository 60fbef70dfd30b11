use super::PostQueryService;
use crate::{
    application::{
        dto::{PageRequest, PostListingDto},
        error::ApplicationResult,
    },
    domain::post::PostFilter,
};

pub const INDEX_TITLE: &str = "Início";

pub struct ListPublishedPostsQuery {
    pub page: PageRequest,
}

impl PostQueryService {
    pub async fn list_published(
        &self,
        query: ListPublishedPostsQuery,
    ) -> ApplicationResult<PostListingDto> {
        self.listing(PostFilter::All, query.page, |_| Ok(INDEX_TITLE.to_string()))
            .await
    }
}
