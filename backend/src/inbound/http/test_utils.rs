//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web};

use crate::domain::AdminCredentials;
use crate::domain::ports::{
    AssetStore, ConfiguredLoginService, FixtureContentRepository, FixtureSiteSettingsRepository,
    MockAssetStore,
};
use crate::domain::seo::PublicBaseUrl;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Admin username every test app is configured with.
pub const TEST_ADMIN_USERNAME: &str = "admin";

/// Admin password every test app is configured with.
pub const TEST_ADMIN_PASSWORD: &str = "password";

/// Public origin every test app is configured with.
pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Build an [`HttpState`] over in-memory fixtures and the given asset store.
///
/// Returns the fixture content repository alongside so tests can seed it
/// directly through the repository ports.
pub fn fixture_state_with_assets(
    assets: Arc<dyn AssetStore>,
) -> (Arc<FixtureContentRepository>, web::Data<HttpState>) {
    let content = Arc::new(FixtureContentRepository::default());
    let admin = AdminCredentials::try_from_parts(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
        .expect("test credentials are valid");
    let base_url = PublicBaseUrl::parse(TEST_BASE_URL).expect("test base url is valid");
    let state = HttpState::new(HttpStatePorts {
        posts: content.clone(),
        categories: content.clone(),
        settings: Arc::new(FixtureSiteSettingsRepository::default()),
        seed: content.clone(),
        assets,
        login: Arc::new(ConfiguredLoginService::new(admin)),
        base_url,
    });
    (content, web::Data::new(state))
}

/// Build an [`HttpState`] over in-memory fixtures for tests that never touch
/// the asset store.
pub fn fixture_state() -> (Arc<FixtureContentRepository>, web::Data<HttpState>) {
    fixture_state_with_assets(Arc::new(MockAssetStore::new()))
}

/// Log in against a test app and return the session cookie.
///
/// Panics when the login endpoint is not mounted or rejects the fixture
/// credentials; tests needing failure paths call the endpoint directly.
pub async fn login_cookie<S, B>(app: &S) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let request = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(serde_json::json!({
            "username": TEST_ADMIN_USERNAME,
            "password": TEST_ADMIN_PASSWORD,
        }))
        .to_request();
    let response = test::call_service(app, request).await;
    assert!(
        response.status().is_success(),
        "test login failed: {}",
        response.status()
    );
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie issued on login")
        .into_owned()
}
