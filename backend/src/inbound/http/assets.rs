//! Media upload and serving handlers.
//!
//! ```text
//! POST /api/v1/admin/assets?filename=<original>   (raw bytes body)
//! GET  /media/{filename}
//! ```
//!
//! Uploads require an admin session; serving is public. The store issues its
//! own collision-free filenames, so served responses are cached as immutable.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::Error;
use crate::domain::ports::{AssetStoreError, StoredAsset};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::public_immutable_header;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error};

const FILENAME_FIELD: FieldName = FieldName::new("filename");

/// Query parameters for the upload endpoint.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct UploadQuery {
    /// Original filename of the upload; only its stem and extension are used.
    pub filename: Option<String>,
}

/// Upload receipt.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Absolute public URL the asset is served from.
    pub url: String,
    /// Filename the store issued.
    pub filename: String,
}

fn map_upload_error(err: AssetStoreError) -> Error {
    match err {
        AssetStoreError::UnsupportedExtension { extension } => {
            Error::invalid_request(format!("unsupported asset extension '{extension}'"))
                .with_details(json!({
                    "field": "filename",
                    "code": "unsupported_extension",
                    "value": extension,
                }))
        }
        AssetStoreError::InvalidFilename { filename } => {
            Error::invalid_request(format!("invalid asset filename '{filename}'")).with_details(
                json!({ "field": "filename", "code": "invalid_filename", "value": filename }),
            )
        }
        AssetStoreError::NotFound { filename } => {
            Error::not_found(format!("no asset named '{filename}'"))
        }
        AssetStoreError::Io { message } => {
            tracing::error!(error = %message, "asset store failure");
            Error::internal("asset storage failed")
        }
    }
}

/// Serving never confirms why a name is unusable.
fn map_serve_error(err: AssetStoreError) -> Error {
    match err {
        AssetStoreError::NotFound { filename }
        | AssetStoreError::InvalidFilename { filename }
        | AssetStoreError::UnsupportedExtension {
            extension: filename,
        } => Error::not_found(format!("no asset named '{filename}'")),
        AssetStoreError::Io { message } => {
            tracing::error!(error = %message, "asset store failure");
            Error::internal("asset storage failed")
        }
    }
}

/// Store an uploaded image.
#[utoipa::path(
    post,
    path = "/api/v1/admin/assets",
    params(UploadQuery),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Asset stored", body = UploadResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "uploadAsset"
)]
#[post("/admin/assets")]
pub async fn upload_asset(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let filename = query
        .into_inner()
        .filename
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| missing_field_error(FILENAME_FIELD))?;
    if body.is_empty() {
        return Err(Error::invalid_request("upload body must not be empty")
            .with_details(json!({ "field": "body", "code": "empty" })));
    }
    let handle = state
        .assets
        .store(StoredAsset {
            original_filename: filename,
            bytes: body.to_vec(),
        })
        .await
        .map_err(map_upload_error)?;
    Ok(HttpResponse::Created().json(UploadResponse {
        url: handle.url,
        filename: handle.filename,
    }))
}

/// Serve a stored asset.
#[utoipa::path(
    get,
    path = "/media/{filename}",
    params(("filename" = String, Path, description = "Issued asset filename")),
    responses(
        (status = 200, description = "Asset bytes"),
        (status = 404, description = "No such asset", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["content"],
    operation_id = "getMedia",
    security([])
)]
#[get("/media/{filename}")]
pub async fn get_media(
    state: web::Data<HttpState>,
    filename: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let content = state
        .assets
        .open(&filename)
        .await
        .map_err(map_serve_error)?;
    Ok(HttpResponse::Ok()
        .content_type(content.content_type)
        .insert_header(public_immutable_header())
        .body(content.bytes))
}
