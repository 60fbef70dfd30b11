use super::PostQueryService;
use crate::{
    application::{
        dto::{PageRequest, PostListingDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostFilter,
};

pub struct ListPostsByTagQuery {
    pub slug: String,
    pub page: PageRequest,
}

impl PostQueryService {
    /// Same not-found policy as categories. The label is the first tag of the
    /// first post, which need not be the tag that was filtered on.
    pub async fn list_by_tag(
        &self,
        query: ListPostsByTagQuery,
    ) -> ApplicationResult<PostListingDto> {
        let filter = PostFilter::TagSlug(query.slug.clone());
        self.listing(filter, query.page, |page| {
            let name = page
                .items
                .first()
                .and_then(|post| post.first_tag())
                .map(|tag| tag.name.as_str().to_string());

            match name {
                Some(name) => Ok(format!("{name} - Tag")),
                None => {
                    tracing::debug!(slug = %query.slug, "no published posts with tag");
                    Err(ApplicationError::not_found("tag not found"))
                }
            }
        })
        .await
    }
}
