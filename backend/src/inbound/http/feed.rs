//! Public content handlers: the home feed, post details, categories, and
//! resolved branding.
//!
//! ```text
//! GET /api/v1/feed?category=<slug>&search=<term>
//! GET /api/v1/posts/{slug}
//! GET /api/v1/categories
//! GET /api/v1/settings
//! ```

use actix_web::{get, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::Error;
use crate::domain::branding::EffectiveSettings;
use crate::domain::content::{Category, Post};
use crate::domain::feed::{CategoryFilter, DisplayCard};
use crate::domain::seo::{self, PageMetadata};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query parameters for the home feed.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    /// Category slug; absent, blank, or `all` means no filtering.
    pub category: Option<String>,
    /// Case-insensitive search over post titles.
    pub search: Option<String>,
}

/// Home feed response.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    /// Cards surviving the filters, newest first.
    pub cards: Vec<DisplayCard>,
    /// Posts in the store before filtering.
    pub total_published: usize,
    /// All categories for the navigation bar.
    pub categories: Vec<Category>,
    /// Document-head metadata for the feed page.
    pub meta: PageMetadata,
}

/// Post detail response.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    /// The post itself.
    pub post: Post,
    /// The owning category, when resolvable.
    pub category: Option<Category>,
    /// Document-head metadata for the detail page.
    pub meta: PageMetadata,
}

/// Compose the home feed.
#[utoipa::path(
    get,
    path = "/api/v1/feed",
    params(FeedQuery),
    responses(
        (status = 200, description = "Composed feed", body = FeedResponse),
        (status = 503, description = "Content store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["content"],
    operation_id = "getFeed",
    security([])
)]
#[get("/feed")]
pub async fn get_feed(
    state: web::Data<HttpState>,
    query: web::Query<FeedQuery>,
) -> ApiResult<web::Json<FeedResponse>> {
    let filter = CategoryFilter::parse(query.category.as_deref());
    let snapshot = state.feed.home_feed(&filter, query.search.as_deref()).await?;
    let settings = state.settings.effective(Utc::now()).await?;
    let meta = seo::feed_metadata(&settings, &state.base_url);
    Ok(web::Json(FeedResponse {
        cards: snapshot.cards,
        total_published: snapshot.total_published,
        categories: snapshot.categories,
        meta,
    }))
}

/// Look up one post by slug.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post detail", body = PostDetailResponse),
        (status = 404, description = "No post with this slug", body = Error),
        (status = 503, description = "Content store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["content"],
    operation_id = "getPost",
    security([])
)]
#[get("/posts/{slug}")]
pub async fn get_post(
    state: web::Data<HttpState>,
    slug: web::Path<String>,
) -> ApiResult<web::Json<PostDetailResponse>> {
    let entry = state.feed.post_detail(&slug).await?;
    let settings = state.settings.effective(Utc::now()).await?;
    let meta = seo::post_metadata(&entry, &settings, &state.base_url);
    Ok(web::Json(PostDetailResponse {
        post: entry.post,
        category: entry.category,
        meta,
    }))
}

/// All categories in navigation order.
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Categories", body = [Category]),
        (status = 503, description = "Content store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["content"],
    operation_id = "listCategories",
    security([])
)]
#[get("/categories")]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Category>>> {
    Ok(web::Json(state.feed.categories().await?))
}

/// Resolved public branding.
#[utoipa::path(
    get,
    path = "/api/v1/settings",
    responses(
        (status = 200, description = "Resolved settings", body = EffectiveSettings),
        (status = 503, description = "Settings store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["content"],
    operation_id = "getPublicSettings",
    security([])
)]
#[get("/settings")]
pub async fn get_public_settings(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<EffectiveSettings>> {
    Ok(web::Json(state.settings.effective(Utc::now()).await?))
}
