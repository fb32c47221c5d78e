//! Admin category handlers.
//!
//! ```text
//! POST   /api/v1/admin/categories
//! DELETE /api/v1/admin/categories/{id}
//! ```
//!
//! Deleting a category that posts still reference is refused with `409`.

use actix_web::{HttpResponse, delete, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::content::Category;
use crate::domain::{CategoryInput, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

const ID_FIELD: FieldName = FieldName::new("id");

/// Category create request body.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    /// Optional explicit slug; derived from the name when absent.
    #[serde(default)]
    pub slug: Option<String>,
    pub color_theme: String,
}

impl From<CategoryPayload> for CategoryInput {
    fn from(payload: CategoryPayload) -> Self {
        Self {
            name: payload.name,
            slug: payload.slug,
            color_theme: payload.color_theme,
        }
    }
}

/// Create a category.
#[utoipa::path(
    post,
    path = "/api/v1/admin/categories",
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 409, description = "Slug already taken", body = Error),
        (status = 503, description = "Content store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "createCategory"
)]
#[post("/admin/categories")]
pub async fn create_category(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CategoryPayload>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let created = state
        .admin
        .create_category(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(created))
}

/// Delete a category.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = String, Path, description = "Category identifier")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 404, description = "No such category", body = Error),
        (status = 409, description = "Category still referenced by posts", body = Error),
        (status = 503, description = "Content store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "deleteCategory"
)]
#[delete("/admin/categories/{id}")]
pub async fn delete_category(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let id = parse_uuid(&id, ID_FIELD)?;
    state.admin.delete_category(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
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
                        .service(crate::inbound::http::posts::create_post)
                        .service(create_category)
                        .service(delete_category),
                ),
        )
        .await
    }

    async fn create(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        cookie: &Cookie<'static>,
        body: Value,
    ) -> (actix_web::http::StatusCode, Value) {
        let response = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/v1/admin/categories")
                .cookie(cookie.clone())
                .set_json(body)
                .to_request(),
        )
        .await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("JSON body");
        (status, value)
    }

    #[actix_web::test]
    async fn create_rejects_requests_without_a_session() {
        let app = test_app().await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/admin/categories")
                .set_json(serde_json::json!({ "name": "Texnologiya", "colorTheme": "yellow" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_derives_the_slug_from_the_name() {
        let app = test_app().await;
        let cookie = login_cookie(&app).await;
        let (status, value) = create(
            &app,
            &cookie,
            serde_json::json!({ "name": "Süni İntellekt", "colorTheme": "blue" }),
        )
        .await;
        assert_eq!(status, actix_web::http::StatusCode::CREATED);
        assert_eq!(value["slug"].as_str(), Some("suni-intellekt"));
        assert_eq!(value["colorTheme"].as_str(), Some("blue"));
    }

    #[actix_web::test]
    async fn unknown_color_theme_reports_the_field() {
        let app = test_app().await;
        let cookie = login_cookie(&app).await;
        let (status, value) = create(
            &app,
            &cookie,
            serde_json::json!({ "name": "Texnologiya", "colorTheme": "magenta" }),
        )
        .await;
        assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(
            value["details"]["field"].as_str(),
            Some("category.color_theme")
        );
    }

    #[actix_web::test]
    async fn delete_refuses_while_posts_reference_the_category() {
        let app = test_app().await;
        let cookie = login_cookie(&app).await;
        let (_, category) = create(
            &app,
            &cookie,
            serde_json::json!({ "name": "Texnologiya", "colorTheme": "yellow" }),
        )
        .await;
        let category_id = category["id"].as_str().expect("category id").to_owned();

        let post_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/admin/posts")
                .cookie(cookie.clone())
                .set_json(serde_json::json!({
                    "title": "Başlıq",
                    "contentHtml": "<p>mətn</p>",
                    "readTime": "3 dəq",
                    "categoryId": category_id,
                    "cardSize": "standard",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(post_res.status(), actix_web::http::StatusCode::CREATED);

        let delete_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/v1/admin/categories/{category_id}"))
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert_eq!(delete_res.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn delete_removes_an_unreferenced_category() {
        let app = test_app().await;
        let cookie = login_cookie(&app).await;
        let (_, category) = create(
            &app,
            &cookie,
            serde_json::json!({ "name": "Texnologiya", "colorTheme": "yellow" }),
        )
        .await;
        let category_id = category["id"].as_str().expect("category id").to_owned();

        let delete_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/v1/admin/categories/{category_id}"))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(delete_res.status(), actix_web::http::StatusCode::NO_CONTENT);
    }
}
