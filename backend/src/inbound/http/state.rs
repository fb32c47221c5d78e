//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AssetStore, CategoryRepository, DemoSeedRepository, LoginService, PostRepository,
    SiteSettingsRepository,
};
use crate::domain::seo::PublicBaseUrl;
use crate::domain::{ContentAdminService, DemoContentSeeder, FeedService, SettingsService};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub posts: Arc<dyn PostRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub settings: Arc<dyn SiteSettingsRepository>,
    pub seed: Arc<dyn DemoSeedRepository>,
    pub assets: Arc<dyn AssetStore>,
    pub login: Arc<dyn LoginService>,
    pub base_url: PublicBaseUrl,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub feed: Arc<FeedService>,
    pub admin: Arc<ContentAdminService>,
    pub settings: Arc<SettingsService>,
    pub seeder: Arc<DemoContentSeeder>,
    pub assets: Arc<dyn AssetStore>,
    pub login: Arc<dyn LoginService>,
    pub base_url: PublicBaseUrl,
}

impl HttpState {
    /// Construct the state, building domain services over the supplied ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::domain::AdminCredentials;
    /// use backend::domain::ports::{
    ///     ConfiguredLoginService, FixtureContentRepository, FixtureSiteSettingsRepository,
    /// };
    /// use backend::domain::seo::PublicBaseUrl;
    /// use backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use backend::outbound::assets::FsAssetStore;
    ///
    /// let content = Arc::new(FixtureContentRepository::default());
    /// let base_url = PublicBaseUrl::parse("http://localhost:3000").expect("base url");
    /// let admin = AdminCredentials::try_from_parts("admin", "password").expect("credentials");
    /// let assets = FsAssetStore::open_ambient(std::path::Path::new("/tmp/media"), &base_url)
    ///     .expect("asset root");
    /// let state = HttpState::new(HttpStatePorts {
    ///     posts: content.clone(),
    ///     categories: content.clone(),
    ///     settings: Arc::new(FixtureSiteSettingsRepository::default()),
    ///     seed: content,
    ///     assets: Arc::new(assets),
    ///     login: Arc::new(ConfiguredLoginService::new(admin)),
    ///     base_url,
    /// });
    /// let _feed = state.feed.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            posts,
            categories,
            settings,
            seed,
            assets,
            login,
            base_url,
        } = ports;
        Self {
            feed: Arc::new(FeedService::new(posts.clone(), categories.clone())),
            admin: Arc::new(ContentAdminService::new(posts, categories)),
            settings: Arc::new(SettingsService::new(settings)),
            seeder: Arc::new(DemoContentSeeder::new(seed)),
            assets,
            login,
            base_url,
        }
    }
}
