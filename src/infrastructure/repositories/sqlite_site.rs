use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::site::{MenuLink, NewSiteSetup, SiteSetup, SiteSetupId, SiteSetupRepository};
use async_trait::async_trait;
use sqlx::{FromRow, SqliteConnection, SqlitePool};

#[derive(Clone)]
pub struct SqliteSiteSetupRepository {
    pool: SqlitePool,
}

impl SqliteSiteSetupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SiteSetupRow {
    id: i64,
    title: String,
    description: String,
    favicon: Option<String>,
}

#[derive(Debug, FromRow)]
struct MenuLinkRow {
    text: String,
    url: String,
    new_tab: bool,
}

async fn load_links(conn: &mut SqliteConnection, row: SiteSetupRow) -> DomainResult<SiteSetup> {
    let links = sqlx::query_as::<_, MenuLinkRow>(
        "SELECT text, url, new_tab FROM menu_links WHERE site_setup_id = ? ORDER BY id",
    )
    .bind(row.id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    Ok(SiteSetup {
        id: SiteSetupId(row.id),
        title: row.title,
        description: row.description,
        favicon: row.favicon,
        menu_links: links
            .into_iter()
            .map(|link| MenuLink {
                text: link.text,
                url: link.url,
                new_tab: link.new_tab,
            })
            .collect(),
    })
}

#[async_trait]
impl SiteSetupRepository for SqliteSiteSetupRepository {
    async fn exists(&self) -> DomainResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM site_setups")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count > 0)
    }

    async fn insert(&self, setup: NewSiteSetup) -> DomainResult<SiteSetup> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, SiteSetupRow>(
            "INSERT INTO site_setups (title, description, favicon) VALUES (?, ?, ?)
             RETURNING id, title, description, favicon",
        )
        .bind(&setup.title)
        .bind(&setup.description)
        .bind(&setup.favicon)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for link in &setup.menu_links {
            sqlx::query(
                "INSERT INTO menu_links (site_setup_id, text, url, new_tab) VALUES (?, ?, ?, ?)",
            )
            .bind(row.id)
            .bind(&link.text)
            .bind(&link.url)
            .bind(link.new_tab)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        let created = load_links(&mut tx, row).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn find_current(&self) -> DomainResult<Option<SiteSetup>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, SiteSetupRow>(
            "SELECT id, title, description, favicon FROM site_setups ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => load_links(&mut conn, row).await.map(Some),
            None => Ok(None),
        }
    }
}
