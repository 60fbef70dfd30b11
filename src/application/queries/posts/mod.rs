mod by_author;
mod by_category;
mod by_tag;
mod get_by_slug;
mod list;
mod search;
mod service;

pub use by_author::ListPostsByAuthorQuery;
pub use by_category::ListPostsByCategoryQuery;
pub use by_tag::ListPostsByTagQuery;
pub use get_by_slug::GetPostBySlugQuery;
pub use list::{INDEX_TITLE, ListPublishedPostsQuery};
pub use search::{SearchOutcome, SearchPostsQuery};
pub use service::PostQueryService;
