// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::{
        content::{
            CreateCategoryCommand, CreatePageCommand, CreatePostCommand, CreateTagCommand,
            UpdatePageCommand, UpdatePostCommand,
        },
        site::{CreateSiteSetupCommand, MenuLinkInput},
    },
    dto::{CategoryDto, PageDto, PostDto, SiteSetupDto, TagDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminActor;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

const fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTermRequest {
    pub name: String,
    /// Generated from the name when omitted or blank.
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePageRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub content: String,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePageRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default = "default_true")]
    pub cover_in_post_content: bool,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

/// Omitted fields keep their stored value. The slug cannot be changed.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub is_published: Option<bool>,
    pub cover: Option<String>,
    /// Removes the cover image; wins over `cover`.
    #[serde(default)]
    pub clear_cover: bool,
    pub cover_in_post_content: Option<bool>,
    pub category_id: Option<i64>,
    /// Detaches the post from its category; wins over `category_id`.
    #[serde(default)]
    pub clear_category: bool,
    /// Replaces the whole tag set when present.
    pub tag_ids: Option<Vec<i64>>,
}

impl UpdatePostRequest {
    fn into_command(self, id: i64) -> UpdatePostCommand {
        let cover = if self.clear_cover {
            Some(None)
        } else {
            self.cover.map(Some)
        };
        let category_id = if self.clear_category {
            Some(None)
        } else {
            self.category_id.map(Some)
        };

        UpdatePostCommand {
            id,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            is_published: self.is_published,
            cover,
            cover_in_post_content: self.cover_in_post_content,
            category_id,
            tag_ids: self.tag_ids,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuLinkRequest {
    pub text: String,
    pub url: String,
    #[serde(default)]
    pub new_tab: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSiteSetupRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Path of an already stored `.png` image.
    #[serde(default)]
    pub favicon: Option<String>,
    #[serde(default)]
    pub menu_links: Vec<MenuLinkRequest>,
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/tags",
    request_body = CreateTermRequest,
    responses(
        (status = 201, description = "Tag created.", body = TagDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    _actor: AdminActor,
    Json(payload): Json<CreateTermRequest>,
) -> HttpResult<(StatusCode, Json<TagDto>)> {
    let command = CreateTagCommand {
        name: payload.name,
        slug: payload.slug,
    };
    state
        .services
        .content_commands
        .create_tag(command)
        .await
        .into_http()
        .map(|tag| (StatusCode::CREATED, Json(tag)))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/categories",
    request_body = CreateTermRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    _actor: AdminActor,
    Json(payload): Json<CreateTermRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let command = CreateCategoryCommand {
        name: payload.name,
        slug: payload.slug,
    };
    state
        .services
        .content_commands
        .create_category(command)
        .await
        .into_http()
        .map(|category| (StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/pages",
    request_body = CreatePageRequest,
    responses(
        (status = 201, description = "Page created.", body = PageDto),
        (status = 400, description = "Invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_page(
    Extension(state): Extension<HttpState>,
    _actor: AdminActor,
    Json(payload): Json<CreatePageRequest>,
) -> HttpResult<(StatusCode, Json<PageDto>)> {
    let command = CreatePageCommand {
        title: payload.title,
        slug: payload.slug,
        content: payload.content,
        is_published: payload.is_published,
    };
    state
        .services
        .content_commands
        .create_page(command)
        .await
        .into_http()
        .map(|page| (StatusCode::CREATED, Json(page)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/pages/{id}",
    params(("id" = i64, Path, description = "Page id")),
    request_body = UpdatePageRequest,
    responses(
        (status = 200, description = "Page updated.", body = PageDto),
        (status = 404, description = "Unknown page.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_page(
    Extension(state): Extension<HttpState>,
    _actor: AdminActor,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePageRequest>,
) -> HttpResult<Json<PageDto>> {
    let command = UpdatePageCommand {
        id,
        title: payload.title,
        content: payload.content,
        is_published: payload.is_published,
    };
    state
        .services
        .content_commands
        .update_page(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown category or tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    AdminActor(actor): AdminActor,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        is_published: payload.is_published,
        cover: payload.cover,
        cover_in_post_content: payload.cover_in_post_content,
        category_id: payload.category_id,
        tag_ids: payload.tag_ids,
    };
    state
        .services
        .content_commands
        .create_post(actor, command)
        .await
        .into_http()
        .map(|post| (StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 404, description = "Unknown post, category or tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    AdminActor(actor): AdminActor,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .content_commands
        .update_post(actor, payload.into_command(id))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/site",
    request_body = CreateSiteSetupRequest,
    responses(
        (status = 201, description = "Site setup created.", body = SiteSetupDto),
        (status = 400, description = "Invalid fields or a non-PNG favicon.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "A setup already exists.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_site_setup(
    Extension(state): Extension<HttpState>,
    _actor: AdminActor,
    Json(payload): Json<CreateSiteSetupRequest>,
) -> HttpResult<(StatusCode, Json<SiteSetupDto>)> {
    let command = CreateSiteSetupCommand {
        title: payload.title,
        description: payload.description,
        favicon: payload.favicon,
        menu_links: payload
            .menu_links
            .into_iter()
            .map(|link| MenuLinkInput {
                text: link.text,
                url: link.url,
                new_tab: link.new_tab,
            })
            .collect(),
    };
    state
        .services
        .site_commands
        .create_site_setup(command)
        .await
        .into_http()
        .map(|setup| (StatusCode::CREATED, Json(setup)))
}
