pub mod pages;
pub mod pagination;
pub mod posts;
pub mod serde_time;
pub mod site;
pub mod taxonomy;

pub use pages::PageDto;
pub use pagination::{PER_PAGE, PageMeta, PageRequest, PageWindow, Paginated};
pub use posts::{PostDto, PostListingDto};
pub use site::{MenuLinkDto, SiteSetupDto};
pub use taxonomy::{CategoryDto, TagDto};
