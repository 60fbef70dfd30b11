use super::PostQueryService;
use crate::{
    application::{
        dto::{PER_PAGE, PageWindow, Paginated, PostListingDto},
        error::ApplicationResult,
    },
    domain::post::PostFilter,
};

const LABEL_QUERY_CHARS: usize = 30;

pub struct SearchPostsQuery {
    pub text: Option<String>,
}

/// A blank search is not an error: the caller should send the visitor to the
/// unfiltered listing instead.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    RedirectToIndex,
    Results(PostListingDto),
}

impl PostQueryService {
    /// Newest matches first, capped at one page.
    pub async fn search(&self, query: SearchPostsQuery) -> ApplicationResult<SearchOutcome> {
        let text = query.text.as_deref().map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Ok(SearchOutcome::RedirectToIndex);
        }

        let filter = PostFilter::Search(text.to_string());
        let items = self.read_repo.list_published(&filter, PER_PAGE, 0).await?;
        let window = PageWindow::single(items.len() as u64, PER_PAGE);

        let shown: String = text.chars().take(LABEL_QUERY_CHARS).collect();
        Ok(SearchOutcome::Results(PostListingDto::new(
            format!("{shown} - Busca"),
            Paginated::new(items, window),
        )))
    }
}
