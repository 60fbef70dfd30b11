use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{NewPage, Page, PageId, PageReadRepository, PageUpdate, PageWriteRepository};
use crate::domain::post::{PostContent, PostTitle};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqlitePageRepository {
    pool: SqlitePool,
}

impl SqlitePageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    title: String,
    slug: String,
    is_published: bool,
    content: String,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            is_published: row.is_published,
            content: PostContent::new(row.content)?,
        })
    }
}

#[async_trait]
impl PageWriteRepository for SqlitePageRepository {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let row = sqlx::query_as::<_, PageRow>(
            "INSERT INTO pages (title, slug, is_published, content) VALUES (?, ?, ?, ?)
             RETURNING id, title, slug, is_published, content",
        )
        .bind(page.title.as_str())
        .bind(page.slug.as_str())
        .bind(page.is_published)
        .bind(page.content.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Page::try_from(row)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let PageUpdate {
            id,
            title,
            is_published,
            content,
        } = update;

        let row = sqlx::query_as::<_, PageRow>(
            "UPDATE pages SET title = COALESCE(?, title), is_published = COALESCE(?, is_published), \
             content = COALESCE(?, content) WHERE id = ?
             RETURNING id, title, slug, is_published, content",
        )
        .bind(title.map(PostTitle::into_inner))
        .bind(is_published)
        .bind(content.map(PostContent::into_inner))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound("page not found".into()))
    }
}

#[async_trait]
impl PageReadRepository for SqlitePageRepository {
    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(
            "SELECT id, title, slug, is_published, content FROM pages
             WHERE slug = ? AND is_published = 1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }
}
