// src/domain/account/entity.rs
use crate::domain::account::value_objects::{AccountId, Username};
use chrono::{DateTime, Utc};

/// Author account as seen by the content core. Credentials live elsewhere.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

impl Account {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Full name when one is on file, otherwise the username.
    pub fn display_name(&self) -> String {
        let full_name = self.full_name();
        if full_name.is_empty() {
            self.username.as_str().to_string()
        } else {
            full_name
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_joined: DateTime<Utc>,
}
