use super::PostQueryService;
use crate::{
    application::{
        dto::{PageRequest, PostListingDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{account::AccountId, post::PostFilter},
};

pub struct ListPostsByAuthorQuery {
    pub author_id: i64,
    pub page: PageRequest,
}

impl PostQueryService {
    /// Fails only when the account is unknown; an author without published
    /// posts gets an empty page.
    pub async fn list_by_author(
        &self,
        query: ListPostsByAuthorQuery,
    ) -> ApplicationResult<PostListingDto> {
        let author_id = AccountId::new(query.author_id)
            .map_err(|_| ApplicationError::not_found("account not found"))?;
        let account = self
            .account_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("account not found"))?;

        let title = format!("Posts de {}", account.display_name());
        self.listing(PostFilter::Author(author_id), query.page, |_| Ok(title))
            .await
    }
}
