use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Drafts are indistinguishable from missing posts.
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .read_repo
            .find_published_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        Ok(post.into())
    }
}
