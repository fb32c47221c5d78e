//! Admin dashboard handlers: aggregates and demo seeding.
//!
//! ```text
//! GET  /api/v1/admin/stats
//! POST /api/v1/admin/seed
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Serialize;

use crate::domain::Error;
use crate::domain::ports::SeedApplication;
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Dashboard aggregates plus deep links for the console.
///
/// The sitemap, robots, and llms documents are generated outside this
/// service; only their public URLs are derived here so the console can link
/// to them.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// All stored posts.
    pub posts: i64,
    /// All stored categories.
    pub categories: i64,
    /// Posts flagged as featured.
    pub featured_posts: i64,
    /// Public sitemap URL.
    pub sitemap_url: String,
    /// Public robots.txt URL.
    pub robots_url: String,
    /// Public llms.txt URL.
    pub llms_url: String,
}

/// Result of a demo seed run.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    /// `applied` when the dataset was written, `already_seeded` otherwise.
    pub result: &'static str,
    /// Categories present after the run.
    pub categories: usize,
    /// Posts present after the run.
    pub posts: usize,
}

/// Dashboard aggregates.
#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    responses(
        (status = 200, description = "Dashboard aggregates", body = StatsResponse),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Content store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "getAdminStats"
)]
#[get("/admin/stats")]
pub async fn get_stats(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<StatsResponse>> {
    session.require_admin()?;
    let stats = state.admin.stats().await?;
    Ok(web::Json(StatsResponse {
        posts: stats.posts,
        categories: stats.categories,
        featured_posts: stats.featured_posts,
        sitemap_url: state.base_url.join("/sitemap.xml"),
        robots_url: state.base_url.join("/robots.txt"),
        llms_url: state.base_url.join("/llms.txt"),
    }))
}

/// Apply the demo content dataset.
#[utoipa::path(
    post,
    path = "/api/v1/admin/seed",
    responses(
        (status = 200, description = "Seed run finished", body = SeedResponse),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Content store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "seedDemoContent"
)]
#[post("/admin/seed")]
pub async fn seed_demo_content(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let outcome = state.seeder.apply().await?;
    Ok(HttpResponse::Ok().json(SeedResponse {
        result: match outcome.result {
            SeedApplication::Applied => "applied",
            SeedApplication::AlreadySeeded => "already_seeded",
        },
        categories: outcome.categories,
        posts: outcome.posts,
    }))
}

#[cfg(test)]
mod tests {
    use crate::inbound::http::test_utils::{fixture_state, login_cookie, test_session_middleware};
    use actix_web::cookie::Cookie;
    use actix_web::{App, test as actix_test, web};
    use serde_json::Value;

    async fn test_app() -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        let (_, state) = fixture_state();
        actix_test::init_service(
            App::new()
                .app_data(state)
                .wrap(test_session_middleware())
                .service(
                    web::scope("/api/v1")
                        .service(crate::inbound::http::auth::login)
                        .service(super::get_stats)
                        .service(super::seed_demo_content),
                ),
        )
        .await
    }

    async fn seed(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        cookie: &Cookie<'static>,
    ) -> Value {
        let response = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/v1/admin/seed")
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        serde_json::from_slice(&body).expect("JSON body")
    }

    #[actix_web::test]
    async fn stats_reject_requests_without_a_session() {
        let app = test_app().await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/admin/stats")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn stats_carry_counts_and_public_document_urls() {
        let app = test_app().await;
        let cookie = login_cookie(&app).await;
        seed(&app, &cookie).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/admin/stats")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("JSON body");
        assert_eq!(value["posts"].as_i64(), Some(6));
        assert_eq!(value["categories"].as_i64(), Some(4));
        assert_eq!(
            value["sitemapUrl"].as_str(),
            Some("http://localhost:3000/sitemap.xml")
        );
        assert_eq!(
            value["robotsUrl"].as_str(),
            Some("http://localhost:3000/robots.txt")
        );
    }

    #[actix_web::test]
    async fn seeding_twice_reports_already_seeded_without_changes() {
        let app = test_app().await;
        let cookie = login_cookie(&app).await;

        let first = seed(&app, &cookie).await;
        assert_eq!(first["result"].as_str(), Some("applied"));
        assert_eq!(first["posts"].as_u64(), Some(6));
        assert_eq!(first["categories"].as_u64(), Some(4));

        let second = seed(&app, &cookie).await;
        assert_eq!(second["result"].as_str(), Some("already_seeded"));
        assert_eq!(second["posts"].as_u64(), Some(6));
    }
}
