// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_account;
mod sqlite_page;
mod sqlite_post;
mod sqlite_site;
mod sqlite_taxonomy;

pub use error::map_sqlx;
pub use sqlite_account::SqliteAccountRepository;
pub use sqlite_page::SqlitePageRepository;
pub use sqlite_post::{SqlitePostReadRepository, SqlitePostWriteRepository};
pub use sqlite_site::SqliteSiteSetupRepository;
pub use sqlite_taxonomy::{SqliteCategoryRepository, SqliteTagRepository};

use crate::application::services::Repositories;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Every repository port backed by the same pool.
pub fn sqlite_repositories(pool: &SqlitePool) -> Repositories {
    let pages = Arc::new(SqlitePageRepository::new(pool.clone()));
    Repositories {
        accounts: Arc::new(SqliteAccountRepository::new(pool.clone())),
        post_write: Arc::new(SqlitePostWriteRepository::new(pool.clone())),
        post_read: Arc::new(SqlitePostReadRepository::new(pool.clone())),
        page_write: pages.clone(),
        page_read: pages,
        tags: Arc::new(SqliteTagRepository::new(pool.clone())),
        categories: Arc::new(SqliteCategoryRepository::new(pool.clone())),
        site: Arc::new(SqliteSiteSetupRepository::new(pool.clone())),
    }
}
