//! Admin site-settings handlers.
//!
//! ```text
//! GET /api/v1/admin/settings
//! PUT /api/v1/admin/settings
//! ```
//!
//! The store holds at most one settings row. `GET` returns `404` until the
//! row is first written; `PUT` replaces the whole document and refreshes the
//! resolver cache before responding.

use actix_web::{get, put, web};

use crate::domain::Error;
use crate::domain::content::{SettingsChanges, SiteSettings};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// The stored settings row.
#[utoipa::path(
    get,
    path = "/api/v1/admin/settings",
    responses(
        (status = 200, description = "Stored settings", body = SiteSettings),
        (status = 401, description = "Login required", body = Error),
        (status = 404, description = "Settings never configured", body = Error),
        (status = 503, description = "Settings store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "getAdminSettings"
)]
#[get("/admin/settings")]
pub async fn get_admin_settings(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<SiteSettings>> {
    session.require_admin()?;
    state
        .settings
        .stored()
        .await?
        .map(web::Json)
        .ok_or_else(|| Error::not_found("settings have not been configured"))
}

/// Replace the settings document.
#[utoipa::path(
    put,
    path = "/api/v1/admin/settings",
    request_body = SettingsChanges,
    responses(
        (status = 200, description = "Settings saved", body = SiteSettings),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Settings store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "putAdminSettings"
)]
#[put("/admin/settings")]
pub async fn put_admin_settings(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<SettingsChanges>,
) -> ApiResult<web::Json<SiteSettings>> {
    session.require_admin()?;
    let stored = state.settings.update(payload.into_inner()).await?;
    Ok(web::Json(stored))
}

#[cfg(test)]
mod tests {
    use crate::inbound::http::test_utils::{fixture_state, login_cookie, test_session_middleware};
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
                        .service(crate::inbound::http::feed::get_public_settings)
                        .service(super::get_admin_settings)
                        .service(super::put_admin_settings),
                ),
        )
        .await
    }

    #[actix_web::test]
    async fn stored_settings_are_not_found_before_first_write() {
        let app = test_app().await;
        let cookie = login_cookie(&app).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/admin/settings")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn put_normalises_blanks_and_refreshes_the_public_view() {
        let app = test_app().await;
        let cookie = login_cookie(&app).await;

        let put_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/api/v1/admin/settings")
                .cookie(cookie.clone())
                .set_json(serde_json::json!({
                    "siteName": "Bloqum",
                    "siteDescription": "   ",
                    "socialLinks": { "linkedin": "https://linkedin.com/in/bloqum", "email": "  " },
                }))
                .to_request(),
        )
        .await;
        assert!(put_res.status().is_success());
        let body = actix_test::read_body(put_res).await;
        let stored: Value = serde_json::from_slice(&body).expect("JSON body");
        assert_eq!(stored["siteName"].as_str(), Some("Bloqum"));
        assert!(stored["siteDescription"].is_null());
        assert!(stored["socialLinks"]["email"].is_null());

        let public_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/settings")
                .to_request(),
        )
        .await;
        let body = actix_test::read_body(public_res).await;
        let resolved: Value = serde_json::from_slice(&body).expect("JSON body");
        assert_eq!(resolved["siteName"].as_str(), Some("Bloqum"));

        let get_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/admin/settings")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(get_res.status().is_success());
    }

    #[actix_web::test]
    async fn put_rejects_requests_without_a_session() {
        let app = test_app().await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/api/v1/admin/settings")
                .set_json(serde_json::json!({ "siteName": "Bloqum" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
