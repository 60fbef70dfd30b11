use super::PostQueryService;
use crate::{
    application::{
        dto::{PageRequest, PostListingDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostFilter,
};

pub struct ListPostsByCategoryQuery {
    pub slug: String,
    pub page: PageRequest,
}

impl PostQueryService {
    /// An unknown category and a category without published posts are both
    /// reported as not found. The label comes from the first post's category.
    pub async fn list_by_category(
        &self,
        query: ListPostsByCategoryQuery,
    ) -> ApplicationResult<PostListingDto> {
        let filter = PostFilter::CategorySlug(query.slug.clone());
        self.listing(filter, query.page, |page| {
            let name = page
                .items
                .first()
                .and_then(|post| post.category.as_ref())
                .map(|category| category.name.as_str().to_string());

            match name {
                Some(name) => Ok(format!("{name} - Categoria")),
                None => {
                    tracing::debug!(slug = %query.slug, "no published posts in category");
                    Err(ApplicationError::not_found("category not found"))
                }
            }
        })
        .await
    }
}
