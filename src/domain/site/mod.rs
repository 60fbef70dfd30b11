pub mod entity;
pub mod repository;

pub use entity::{MenuLink, NewMenuLink, NewSiteSetup, SiteSetup, SiteSetupId};
pub use repository::SiteSetupRepository;
