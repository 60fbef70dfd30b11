use std::sync::Arc;

use crate::{
    application::{
        dto::{PER_PAGE, PageRequest, Paginated, PostListingDto},
        error::ApplicationResult,
    },
    domain::{
        account::AccountRepository,
        post::{Post, PostFilter, PostReadRepository},
    },
};

/// Read side for public post listings. Every path goes through the
/// published-only predicate of [`PostReadRepository`].
pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) account_repo: Arc<dyn AccountRepository>,
}

impl PostQueryService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        account_repo: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            read_repo,
            account_repo,
        }
    }

    /// Counts, clamps the requested page, fetches it, then labels it.
    pub(super) async fn listing<F>(
        &self,
        filter: PostFilter,
        request: PageRequest,
        label: F,
    ) -> ApplicationResult<PostListingDto>
    where
        F: FnOnce(&Paginated<Post>) -> ApplicationResult<String>,
    {
        let count = self.read_repo.count_published(&filter).await?;
        let window = request.resolve(count, PER_PAGE);
        let items = self
            .read_repo
            .list_published(&filter, window.per_page, window.offset())
            .await?;

        let page = Paginated::new(items, window);
        let title = label(&page)?;
        Ok(PostListingDto::new(title, page))
    }
}
