// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    database_max_connections: u32,
    admin_token: Option<String>,
    admin_account_id: Option<i64>,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://blog.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_connections() -> u32 {
    16
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the ones that are present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|value| *value >= 1)
                .ok_or_else(|| {
                    ConfigError::Invalid("DATABASE_MAX_CONNECTIONS must be a positive integer".into())
                })?,
            Err(_) => default_max_connections(),
        };

        let admin_token = env::var("ADMIN_TOKEN")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let admin_account_id = match env::var("ADMIN_ACCOUNT_ID") {
            Ok(raw) => Some(
                raw.parse::<i64>()
                    .ok()
                    .filter(|value| *value > 0)
                    .ok_or_else(|| {
                        ConfigError::Invalid("ADMIN_ACCOUNT_ID must be a positive integer".into())
                    })?,
            ),
            Err(_) => None,
        };

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            listen_addr,
            database_max_connections,
            admin_token,
            admin_account_id,
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    /// Shared secret for the management routes; `None` disables them.
    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token.as_deref()
    }

    /// Account recorded as author/editor of management writes.
    pub fn admin_account_id(&self) -> Option<i64> {
        self.admin_account_id
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
