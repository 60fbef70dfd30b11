// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{content::ContentCommandService, site::SiteCommandService},
        ports::{ClockPort, RandomSourcePort, SlugGeneratorPort},
        queries::{pages::PageQueryService, posts::PostQueryService, site::SiteQueryService},
    },
    domain::{
        account::AccountRepository,
        page::{PageReadRepository, PageWriteRepository},
        post::{PostReadRepository, PostWriteRepository},
        site::SiteSetupRepository,
        slug::SlugAssigner,
        taxonomy::{CategoryRepository, TagRepository},
    },
};

/// Repositories the services are wired from.
pub struct Repositories {
    pub accounts: Arc<dyn AccountRepository>,
    pub post_write: Arc<dyn PostWriteRepository>,
    pub post_read: Arc<dyn PostReadRepository>,
    pub page_write: Arc<dyn PageWriteRepository>,
    pub page_read: Arc<dyn PageReadRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub site: Arc<dyn SiteSetupRepository>,
}

pub struct ApplicationServices {
    pub content_commands: Arc<ContentCommandService>,
    pub site_commands: Arc<SiteCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub page_queries: Arc<PageQueryService>,
    pub site_queries: Arc<SiteQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        random: Arc<RandomSourcePort>,
    ) -> Self {
        let slug_assigner = Arc::new(SlugAssigner::new(slugger, random));

        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&repos.post_write),
            Arc::clone(&repos.post_read),
            Arc::clone(&repos.page_write),
            Arc::clone(&repos.tags),
            Arc::clone(&repos.categories),
            slug_assigner,
            clock,
        ));
        let site_commands = Arc::new(SiteCommandService::new(Arc::clone(&repos.site)));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&repos.post_read),
            Arc::clone(&repos.accounts),
        ));
        let page_queries = Arc::new(PageQueryService::new(Arc::clone(&repos.page_read)));
        let site_queries = Arc::new(SiteQueryService::new(Arc::clone(&repos.site)));

        Self {
            content_commands,
            site_commands,
            post_queries,
            page_queries,
            site_queries,
        }
    }
}
