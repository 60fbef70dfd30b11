use crate::domain::page::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub is_published: bool,
    pub content: String,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.into(),
            title: page.title.into_inner(),
            slug: page.slug.into_inner(),
            is_published: page.is_published,
            content: page.content.into_inner(),
        }
    }
}
