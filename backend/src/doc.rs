//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (public content,
//!   admin console, auth, media, health)
//! - **Schemas**: the domain entities and adapter DTOs those endpoints
//!   exchange
//! - **Security**: the session cookie authentication scheme
//!
//! The generated specification is served by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::branding::EffectiveSettings;
use crate::domain::content::{
    Category, ColorTheme, Post, PostWithCategory, SettingsChanges, SiteSettings,
};
use crate::domain::feed::DisplayCard;
use crate::domain::layout::{CardSize, LayoutSpan};
use crate::domain::seo::PageMetadata;
use crate::domain::{Error, ErrorCode};
use crate::inbound::http::admin::{SeedResponse, StatsResponse};
use crate::inbound::http::assets::UploadResponse;
use crate::inbound::http::auth::LoginRequest;
use crate::inbound::http::categories::CategoryPayload;
use crate::inbound::http::feed::{FeedResponse, PostDetailResponse};
use crate::inbound::http::posts::PostPayload;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Marketing blog backend API",
        description = "HTTP interface for the public content feed and the \
                       session-authenticated admin console.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::feed::get_feed,
        crate::inbound::http::feed::get_post,
        crate::inbound::http::feed::list_categories,
        crate::inbound::http::feed::get_public_settings,
        crate::inbound::http::posts::list_admin_posts,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::update_post,
        crate::inbound::http::posts::delete_post,
        crate::inbound::http::categories::create_category,
        crate::inbound::http::categories::delete_category,
        crate::inbound::http::settings::get_admin_settings,
        crate::inbound::http::settings::put_admin_settings,
        crate::inbound::http::assets::upload_asset,
        crate::inbound::http::assets::get_media,
        crate::inbound::http::admin::get_stats,
        crate::inbound::http::admin::seed_demo_content,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Category,
        ColorTheme,
        Post,
        PostWithCategory,
        CardSize,
        LayoutSpan,
        DisplayCard,
        SiteSettings,
        SettingsChanges,
        EffectiveSettings,
        PageMetadata,
        LoginRequest,
        PostPayload,
        CategoryPayload,
        FeedResponse,
        PostDetailResponse,
        UploadResponse,
        StatsResponse,
        SeedResponse,
    )),
    tags(
        (name = "auth", description = "Admin session management"),
        (name = "content", description = "Public feed, posts, and settings"),
        (name = "admin", description = "Session-authenticated content management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
