// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::response::Response;
use blog_core::{
    application::{
        ports::{ClockPort, RandomSourcePort, SlugGeneratorPort},
        services::ApplicationServices,
    },
    domain::account::{Account, AccountId, AccountRepository, NewAccount, Username},
    infrastructure::{
        database,
        repositories::{SqliteAccountRepository, sqlite_repositories},
        util::{DefaultSlugGenerator, OsRandomSource},
    },
    presentation::http::{
        routes::build_router,
        state::{AdminAccess, HttpState},
    },
};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// マイグレーション済みのインメモリ SQLite プール
pub async fn memory_pool() -> SqlitePool {
    let pool = database::init_memory_pool().await.expect("memory pool");
    database::run_migrations(&pool).await.expect("migrations");
    pool
}

/// 実スラッグ生成器と OS 乱数を使うサービス群
pub fn sqlite_services(pool: &SqlitePool) -> ApplicationServices {
    sqlite_services_with(
        pool,
        Arc::new(mocks::SteppingClock::default()),
        Arc::new(DefaultSlugGenerator),
        Arc::new(OsRandomSource),
    )
}

pub fn sqlite_services_with(
    pool: &SqlitePool,
    clock: Arc<ClockPort>,
    slugger: Arc<SlugGeneratorPort>,
    random: Arc<RandomSourcePort>,
) -> ApplicationServices {
    ApplicationServices::new(sqlite_repositories(pool), clock, slugger, random)
}

pub async fn insert_account(pool: &SqlitePool, username: &str, first: &str, last: &str) -> Account {
    SqliteAccountRepository::new(pool.clone())
        .insert(NewAccount {
            username: Username::new(username).unwrap(),
            first_name: first.into(),
            last_name: last.into(),
            email: format!("{username}@example.com"),
            date_joined: mocks::fixed_now(),
        })
        .await
        .expect("insert account")
}

/// 管理トークン付きのテスト用ルーター
pub async fn make_test_router(pool: &SqlitePool, admin_account: Option<AccountId>) -> axum::Router {
    make_router_with_admin(
        pool,
        AdminAccess {
            token: Some(ADMIN_TOKEN.into()),
            account_id: admin_account,
        },
    )
}

pub fn make_router_with_admin(pool: &SqlitePool, admin: AdminAccess) -> axum::Router {
    let state = HttpState {
        services: Arc::new(sqlite_services(pool)),
        admin,
    };
    build_router(state, &["*".to_string()])
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> axum::http::Request<Body> {
    let mut builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
