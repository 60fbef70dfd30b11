// src/presentation/http/controllers/site.rs
use crate::application::dto::SiteSetupDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

/// Responds with `null` until a setup has been created.
#[utoipa::path(
    get,
    path = "/api/v1/site",
    responses(
        (status = 200, description = "Current site setup, or null.", body = SiteSetupDto)
    ),
    tag = "Site"
)]
pub async fn current_site(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Option<SiteSetupDto>>> {
    state
        .services
        .site_queries
        .current()
        .await
        .into_http()
        .map(Json)
}
