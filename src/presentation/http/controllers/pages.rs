// src/presentation/http/controllers/pages.rs
use crate::application::{dto::PageDto, queries::pages::GetPageBySlugQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/pages/{slug}",
    params(("slug" = String, Path, description = "Page slug")),
    responses(
        (status = 200, description = "A published page.", body = PageDto),
        (status = 404, description = "Unknown slug or unpublished page.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn get_page_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_queries
        .get_page_by_slug(GetPageBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}
