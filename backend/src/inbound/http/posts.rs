//! Admin post handlers.
//!
//! ```text
//! GET    /api/v1/admin/posts
//! POST   /api/v1/admin/posts
//! PUT    /api/v1/admin/posts/{id}
//! DELETE /api/v1/admin/posts/{id}
//! ```
//!
//! Every route requires an authenticated admin session.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::content::PostWithCategory;
use crate::domain::{Error, PostInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

const ID_FIELD: FieldName = FieldName::new("id");
const CATEGORY_ID_FIELD: FieldName = FieldName::new("categoryId");

/// Post create/update request body.
///
/// `slug` is optional; when absent it is derived from the title. `categoryId`
/// is carried as a string so malformed identifiers produce the shared
/// field-error shape instead of a bare deserialisation failure.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub content_html: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub read_time: String,
    pub category_id: String,
    pub card_size: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub og_image_url: Option<String>,
}

impl PostPayload {
    fn into_input(self) -> Result<PostInput, Error> {
        let category_id = parse_uuid(&self.category_id, CATEGORY_ID_FIELD)?;
        Ok(PostInput {
            title: self.title,
            slug: self.slug,
            content_html: self.content_html,
            thumbnail_url: self.thumbnail_url,
            read_time: self.read_time,
            category_id,
            card_size: self.card_size,
            is_featured: self.is_featured,
            seo_title: self.seo_title,
            seo_description: self.seo_description,
            og_image_url: self.og_image_url,
        })
    }
}

/// Every post for the admin table, newest created first.
#[utoipa::path(
    get,
    path = "/api/v1/admin/posts",
    responses(
        (status = 200, description = "All posts", body = [PostWithCategory]),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Content store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "listAdminPosts"
)]
#[get("/admin/posts")]
pub async fn list_admin_posts(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<PostWithCategory>>> {
    session.require_admin()?;
    Ok(web::Json(state.admin.list_posts().await?))
}

/// Create a post.
#[utoipa::path(
    post,
    path = "/api/v1/admin/posts",
    request_body = PostPayload,
    responses(
        (status = 201, description = "Post created", body = PostWithCategory),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 409, description = "Slug already taken", body = Error),
        (status = 503, description = "Content store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "createPost"
)]
#[post("/admin/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<PostPayload>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let created = state.admin.create_post(payload.into_inner().into_input()?).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Replace a post's content fields.
#[utoipa::path(
    put,
    path = "/api/v1/admin/posts/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    request_body = PostPayload,
    responses(
        (status = 200, description = "Post updated", body = PostWithCategory),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 404, description = "No such post", body = Error),
        (status = 409, description = "Slug already taken", body = Error),
        (status = 503, description = "Content store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "updatePost"
)]
#[put("/admin/posts/{id}")]
pub async fn update_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<String>,
    payload: web::Json<PostPayload>,
) -> ApiResult<web::Json<PostWithCategory>> {
    session.require_admin()?;
    let id = parse_uuid(&id, ID_FIELD)?;
    let updated = state.admin.update_post(id, payload.into_inner().into_input()?).await?;
    Ok(web::Json(updated))
}

/// Delete a post.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/posts/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 404, description = "No such post", body = Error),
        (status = 503, description = "Content store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "deletePost"
)]
#[delete("/admin/posts/{id}")]
pub async fn delete_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let id = parse_uuid(&id, ID_FIELD)?;
    state.admin.delete_post(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
