// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::get_post_by_slug,
        crate::presentation::http::controllers::posts::list_posts_by_author,
        crate::presentation::http::controllers::posts::list_posts_by_category,
        crate::presentation::http::controllers::posts::list_posts_by_tag,
        crate::presentation::http::controllers::posts::search_posts,
        crate::presentation::http::controllers::pages::get_page_by_slug,
        crate::presentation::http::controllers::site::current_site,
        crate::presentation::http::controllers::admin::create_tag,
        crate::presentation::http::controllers::admin::create_category,
        crate::presentation::http::controllers::admin::create_page,
        crate::presentation::http::controllers::admin::update_page,
        crate::presentation::http::controllers::admin::create_post,
        crate::presentation::http::controllers::admin::update_post,
        crate::presentation::http::controllers::admin::create_site_setup,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::admin::CreateTermRequest,
            crate::presentation::http::controllers::admin::CreatePageRequest,
            crate::presentation::http::controllers::admin::UpdatePageRequest,
            crate::presentation::http::controllers::admin::CreatePostRequest,
            crate::presentation::http::controllers::admin::UpdatePostRequest,
            crate::presentation::http::controllers::admin::MenuLinkRequest,
            crate::presentation::http::controllers::admin::CreateSiteSetupRequest,
            crate::application::dto::PostDto,
            crate::application::dto::PostListingDto,
            crate::application::dto::PageMeta,
            crate::application::dto::PageDto,
            crate::application::dto::TagDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::SiteSetupDto,
            crate::application::dto::MenuLinkDto
        )
    ),
    tags(
        (name = "Posts", description = "Published post listings and search"),
        (name = "Pages", description = "Standalone pages"),
        (name = "Site", description = "Site-wide setup"),
        (name = "Admin", description = "Content management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Blog API",
        description = "Blog backend serving published posts, pages and site setup",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route(OPENAPI_PATH, get(serve_openapi))
}
