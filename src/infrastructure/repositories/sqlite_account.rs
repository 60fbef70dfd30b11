// src/infrastructure/repositories/sqlite_account.rs
use super::map_sqlx;
use crate::domain::account::{Account, AccountId, AccountRepository, NewAccount, Username};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    is_active: bool,
    date_joined: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId::new(row.id)?,
            username: Username::new(row.username)?,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            is_active: row.is_active,
            date_joined: row.date_joined,
        })
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn insert(&self, account: NewAccount) -> DomainResult<Account> {
        let NewAccount {
            username,
            first_name,
            last_name,
            email,
            date_joined,
        } = account;

        let row = sqlx::query_as::<_, AccountRow>(
            "INSERT INTO accounts (username, first_name, last_name, email, is_active, date_joined)
             VALUES (?, ?, ?, ?, 1, ?)
             RETURNING id, username, first_name, last_name, email, is_active, date_joined",
        )
        .bind(username.as_str())
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(date_joined)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Account::try_from(row)
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, username, first_name, last_name, email, is_active, date_joined
             FROM accounts WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Account::try_from).transpose()
    }

    async fn delete(&self, id: AccountId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("account not found".into()));
        }
        Ok(())
    }
}
