// src/application/commands/content/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        page::PageWriteRepository,
        post::{PostReadRepository, PostWriteRepository},
        slug::SlugAssigner,
        taxonomy::{CategoryRepository, TagRepository},
    },
};

/// Management-side writes for posts, pages, tags and categories.
pub struct ContentCommandService {
    pub(super) post_write: Arc<dyn PostWriteRepository>,
    pub(super) post_read: Arc<dyn PostReadRepository>,
    pub(super) page_write: Arc<dyn PageWriteRepository>,
    pub(super) tags: Arc<dyn TagRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) slug_assigner: Arc<SlugAssigner>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContentCommandService {
    pub fn new(
        post_write: Arc<dyn PostWriteRepository>,
        post_read: Arc<dyn PostReadRepository>,
        page_write: Arc<dyn PageWriteRepository>,
        tags: Arc<dyn TagRepository>,
        categories: Arc<dyn CategoryRepository>,
        slug_assigner: Arc<SlugAssigner>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            post_write,
            post_read,
            page_write,
            tags,
            categories,
            slug_assigner,
            clock,
        }
    }
}
