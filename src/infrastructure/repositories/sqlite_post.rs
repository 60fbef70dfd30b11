// src/infrastructure/repositories/sqlite_post.rs
use super::map_sqlx;
use crate::domain::account::AccountId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostContent, PostExcerpt, PostFilter, PostId, PostReadRepository, PostTitle,
    PostUpdate, PostWriteRepository,
};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{Category, CategoryId, Tag, TagId, TermName};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use std::collections::HashMap;

const POST_COLUMNS: &str = "SELECT p.id, p.title, p.slug, p.excerpt, p.content, p.is_published, \
     p.cover, p.cover_in_post_content, p.created_by, p.updated_by, p.created_at, p.updated_at, \
     c.id AS category_id, c.name AS category_name, c.slug AS category_slug \
     FROM posts p LEFT JOIN categories c ON c.id = p.category_id";

const POST_COUNT: &str =
    "SELECT COUNT(*) FROM posts p LEFT JOIN categories c ON c.id = p.category_id";

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: SqlitePool,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: SqlitePool,
}

impl SqlitePostReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    is_published: bool,
    cover: Option<String>,
    cover_in_post_content: bool,
    created_by: Option<i64>,
    updated_by: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_id: Option<i64>,
    category_name: Option<String>,
    category_slug: Option<String>,
}

#[derive(Debug, FromRow)]
struct PostTagRow {
    post_id: i64,
    id: i64,
    name: String,
    slug: String,
}

impl PostRow {
    fn into_post(self, tags: Vec<Tag>) -> DomainResult<Post> {
        let category = match (self.category_id, self.category_name, self.category_slug) {
            (Some(id), Some(name), Some(slug)) => Some(Category {
                id: CategoryId::new(id)?,
                name: TermName::new(name)?,
                slug: Slug::new(slug)?,
            }),
            _ => None,
        };

        Ok(Post {
            id: PostId::new(self.id)?,
            title: PostTitle::new(self.title)?,
            slug: Slug::new(self.slug)?,
            excerpt: PostExcerpt::new(self.excerpt)?,
            content: PostContent::new(self.content)?,
            is_published: self.is_published,
            cover: self.cover,
            cover_in_post_content: self.cover_in_post_content,
            category,
            tags,
            created_by: self.created_by.map(AccountId::new).transpose()?,
            updated_by: self.updated_by.map(AccountId::new).transpose()?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// `%text%` with LIKE wildcards in `text` escaped by a backslash.
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Lowercased title, excerpt and content that `PostFilter::Search` matches against.
/// SQLite's `LIKE` folds ASCII case only, so the column is lowercased here.
fn search_text(title: &str, excerpt: &str, content: &str) -> String {
    [title, excerpt, content].join("\n").to_lowercase()
}

async fn refresh_search_text(conn: &mut SqliteConnection, id: i64) -> DomainResult<()> {
    let (title, excerpt, content): (String, String, String) =
        sqlx::query_as("SELECT title, excerpt, content FROM posts WHERE id = ?")
            .bind(id)
            .fetch_one(&mut *conn)
            .await
            .map_err(map_sqlx)?;

    sqlx::query("UPDATE posts SET search_text = ? WHERE id = ?")
        .bind(search_text(&title, &excerpt, &content))
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    Ok(())
}

fn apply_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &PostFilter) {
    builder.push(" WHERE p.is_published = 1");

    match filter {
        PostFilter::All => {}
        PostFilter::Author(id) => {
            builder.push(" AND p.created_by = ");
            builder.push_bind(i64::from(*id));
        }
        PostFilter::CategorySlug(slug) => {
            builder.push(" AND c.slug = ");
            builder.push_bind(slug.clone());
        }
        PostFilter::TagSlug(slug) => {
            builder.push(
                " AND EXISTS (SELECT 1 FROM post_tags pt JOIN tags t ON t.id = pt.tag_id \
                 WHERE pt.post_id = p.id AND t.slug = ",
            );
            builder.push_bind(slug.clone());
            builder.push(")");
        }
        PostFilter::Search(text) => {
            builder.push(" AND p.search_text LIKE ");
            builder.push_bind(like_pattern(&text.to_lowercase()));
            builder.push(" ESCAPE '\\'");
        }
    }
}

/// Loads tags for `rows` in one query and assembles the posts, keeping row order.
async fn hydrate(conn: &mut SqliteConnection, rows: Vec<PostRow>) -> DomainResult<Vec<Post>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT pt.post_id, t.id, t.name, t.slug FROM post_tags pt \
         JOIN tags t ON t.id = pt.tag_id WHERE pt.post_id IN (",
    );
    let mut separated = builder.separated(", ");
    for row in &rows {
        separated.push_bind(row.id);
    }
    separated.push_unseparated(") ORDER BY t.id");

    let tag_rows = builder
        .build_query_as::<PostTagRow>()
        .fetch_all(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    let mut tags_by_post: HashMap<i64, Vec<Tag>> = HashMap::new();
    for tag_row in tag_rows {
        let tag = Tag {
            id: TagId::new(tag_row.id)?,
            name: TermName::new(tag_row.name)?,
            slug: Slug::new(tag_row.slug)?,
        };
        tags_by_post.entry(tag_row.post_id).or_default().push(tag);
    }

    rows.into_iter()
        .map(|row| {
            let tags = tags_by_post.remove(&row.id).unwrap_or_default();
            row.into_post(tags)
        })
        .collect()
}

async fn fetch_by_id(conn: &mut SqliteConnection, id: i64) -> DomainResult<Option<Post>> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(POST_COLUMNS);
    builder.push(" WHERE p.id = ");
    builder.push_bind(id);

    let row = builder
        .build_query_as::<PostRow>()
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    match row {
        Some(row) => Ok(hydrate(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

async fn replace_tags(conn: &mut SqliteConnection, post_id: i64, tag_ids: &[TagId]) -> DomainResult<()> {
    sqlx::query("DELETE FROM post_tags WHERE post_id = ?")
        .bind(post_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    for tag_id in tag_ids {
        sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES (?, ?)")
            .bind(post_id)
            .bind(i64::from(*tag_id))
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }

    Ok(())
}

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            excerpt,
            content,
            is_published,
            cover,
            cover_in_post_content,
            category_id,
            tag_ids,
            created_by,
            created_at,
            updated_at,
        } = post;

        let searchable = search_text(title.as_str(), excerpt.as_str(), content.as_str());
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO posts (title, slug, excerpt, content, is_published, cover, \
             cover_in_post_content, category_id, created_by, updated_by, created_at, updated_at, \
             search_text)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, NULL, ?, ?, ?)
             RETURNING id",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(excerpt.as_str())
        .bind(content.as_str())
        .bind(is_published)
        .bind(cover)
        .bind(cover_in_post_content)
        .bind(category_id.map(i64::from))
        .bind(created_by.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .bind(searchable)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_tags(&mut tx, id, &tag_ids).await?;
        let created = fetch_by_id(&mut tx, id).await?;
        tx.commit().await.map_err(map_sqlx)?;

        created.ok_or_else(|| DomainError::Persistence("inserted post vanished".into()))
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            excerpt,
            content,
            is_published,
            cover,
            cover_in_post_content,
            category_id,
            tag_ids,
            updated_by,
            updated_at,
        } = update;

        let text_changed = title.is_some() || excerpt.is_some() || content.is_some();
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(is_published) = is_published {
            builder.push(", is_published = ");
            builder.push_bind(is_published);
        }
        if let Some(cover) = cover {
            builder.push(", cover = ");
            builder.push_bind(cover);
        }
        if let Some(value) = cover_in_post_content {
            builder.push(", cover_in_post_content = ");
            builder.push_bind(value);
        }
        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(category_id.map(i64::from));
        }
        if let Some(account) = updated_by {
            builder.push(", updated_by = ");
            builder.push_bind(i64::from(account));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = builder
            .build()
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }

        if text_changed {
            refresh_search_text(&mut tx, i64::from(id)).await?;
        }

        if let Some(tag_ids) = tag_ids {
            replace_tags(&mut tx, i64::from(id), &tag_ids).await?;
        }

        let updated = fetch_by_id(&mut tx, i64::from(id)).await?;
        tx.commit().await.map_err(map_sqlx)?;

        updated.ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        fetch_by_id(&mut conn, i64::from(id)).await
    }

    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(POST_COLUMNS);
        builder.push(" WHERE p.is_published = 1 AND p.slug = ");
        builder.push_bind(slug.as_str().to_string());

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(hydrate(&mut conn, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn count_published(&self, filter: &PostFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(POST_COUNT);
        apply_filter(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn list_published(
        &self,
        filter: &PostFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<Post>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(POST_COLUMNS);
        apply_filter(&mut builder, filter);
        builder.push(" ORDER BY p.id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        hydrate(&mut conn, rows).await
    }
}
