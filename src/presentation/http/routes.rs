// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, pages, posts, site},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// `allowed_origins` of `*` opens CORS to any origin. Entries that are not
/// valid header values are skipped with a warning.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/posts", get(posts::list_posts))
        .route("/api/v1/posts/{slug}", get(posts::get_post_by_slug))
        .route("/api/v1/pages/{slug}", get(pages::get_page_by_slug))
        .route(
            "/api/v1/created-by/{author_id}",
            get(posts::list_posts_by_author),
        )
        .route(
            "/api/v1/categories/{slug}/posts",
            get(posts::list_posts_by_category),
        )
        .route("/api/v1/tags/{slug}/posts", get(posts::list_posts_by_tag))
        .route("/api/v1/search", get(posts::search_posts))
        .route("/api/v1/site", get(site::current_site))
        .route("/api/v1/admin/tags", post(admin::create_tag))
        .route("/api/v1/admin/categories", post(admin::create_category))
        .route("/api/v1/admin/pages", post(admin::create_page))
        .route("/api/v1/admin/pages/{id}", put(admin::update_page))
        .route("/api/v1/admin/posts", post(admin::create_post))
        .route("/api/v1/admin/posts/{id}", put(admin::update_post))
        .route("/api/v1/admin/site", post(admin::create_site_setup))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
