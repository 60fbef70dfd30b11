use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{
    Category, CategoryId, CategoryRepository, NewCategory, NewTag, Tag, TagId, TagRepository,
    TermName,
};
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

#[derive(Clone)]
pub struct SqliteTagRepository {
    pool: SqlitePool,
}

impl SqliteTagRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Shared row shape of `tags` and `categories`.
#[derive(Debug, FromRow)]
struct TermRow {
    id: i64,
    name: String,
    slug: String,
}

impl TryFrom<TermRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TermRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TermName::new(row.name)?,
            slug: Slug::new(row.slug)?,
        })
    }
}

impl TryFrom<TermRow> for Category {
    type Error = DomainError;

    fn try_from(row: TermRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: TermName::new(row.name)?,
            slug: Slug::new(row.slug)?,
        })
    }
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TermRow>(
            "INSERT INTO tags (name, slug) VALUES (?, ?) RETURNING id, name, slug",
        )
        .bind(tag.name.as_str())
        .bind(tag.slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, name, slug FROM tags WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(i64::from(*id));
        }
        separated.push_unseparated(") ORDER BY id");

        let rows = builder
            .build_query_as::<TermRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, TermRow>(
            "INSERT INTO categories (name, slug) VALUES (?, ?) RETURNING id, name, slug",
        )
        .bind(category.name.as_str())
        .bind(category.slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, TermRow>(
            "SELECT id, name, slug FROM categories WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }
}
