// src/presentation/http/controllers/posts.rs
use crate::application::{
    dto::{PageRequest, PostDto, PostListingDto},
    queries::posts::{
        GetPostBySlugQuery, ListPostsByAuthorQuery, ListPostsByCategoryQuery, ListPostsByTagQuery,
        ListPublishedPostsQuery, SearchOutcome, SearchPostsQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

pub const POSTS_INDEX_PATH: &str = "/api/v1/posts";

/// `page` is kept as raw text: anything that is not an integer means page 1.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageParams {
    fn request(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref())
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    #[serde(default)]
    pub search: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PageParams),
    responses(
        (status = 200, description = "Published posts, newest first.", body = PostListingDto)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PostListingDto>> {
    state
        .services
        .post_queries
        .list_published(ListPublishedPostsQuery {
            page: params.request(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "A published post.", body = PostDto),
        (status = 404, description = "Unknown slug or unpublished post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/created-by/{author_id}",
    params(("author_id" = i64, Path, description = "Account id"), PageParams),
    responses(
        (status = 200, description = "Published posts by one author.", body = PostListingDto),
        (status = 404, description = "Unknown account.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts_by_author(
    Extension(state): Extension<HttpState>,
    Path(author_id): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PostListingDto>> {
    // Non-numeric ids behave like unknown accounts.
    let author_id = author_id.trim().parse::<i64>().unwrap_or(0);
    state
        .services
        .post_queries
        .list_by_author(ListPostsByAuthorQuery {
            author_id,
            page: params.request(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}/posts",
    params(("slug" = String, Path, description = "Category slug"), PageParams),
    responses(
        (status = 200, description = "Published posts in the category.", body = PostListingDto),
        (status = 404, description = "No published post in the category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts_by_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PostListingDto>> {
    state
        .services
        .post_queries
        .list_by_category(ListPostsByCategoryQuery {
            slug,
            page: params.request(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tags/{slug}/posts",
    params(("slug" = String, Path, description = "Tag slug"), PageParams),
    responses(
        (status = 200, description = "Published posts carrying the tag.", body = PostListingDto),
        (status = 404, description = "No published post carries the tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts_by_tag(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PostListingDto>> {
    state
        .services
        .post_queries
        .list_by_tag(ListPostsByTagQuery {
            slug,
            page: params.request(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/search",
    params(SearchParams),
    responses(
        (status = 200, description = "First page of matching published posts.", body = PostListingDto),
        (status = 303, description = "Blank query; redirects to the post index.")
    ),
    tag = "Posts"
)]
pub async fn search_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Response> {
    let outcome = state
        .services
        .post_queries
        .search(SearchPostsQuery {
            text: params.search,
        })
        .await
        .into_http()?;

    Ok(match outcome {
        SearchOutcome::RedirectToIndex => Redirect::to(POSTS_INDEX_PATH).into_response(),
        SearchOutcome::Results(listing) => Json(listing).into_response(),
    })
}
