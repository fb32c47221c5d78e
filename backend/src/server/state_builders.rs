//! Builders for the HTTP state's port implementations.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{
    AssetStore, CategoryRepository, ConfiguredLoginService, DemoSeedRepository,
    FixtureContentRepository, FixtureSiteSettingsRepository, PostRepository,
    SiteSettingsRepository,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::assets::FsAssetStore;
use crate::outbound::persistence::{
    DieselCategoryRepository, DieselDemoSeedRepository, DieselPostRepository,
    DieselSiteSettingsRepository,
};

use super::ServerConfig;

/// Content port bundle selected by the presence of a database pool.
struct ContentPorts {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
    settings: Arc<dyn SiteSettingsRepository>,
    seed: Arc<dyn DemoSeedRepository>,
}

/// Select PostgreSQL-backed repositories when a pool is configured, or the
/// shared in-memory fixture otherwise. The fixture case reuses one store for
/// posts, categories, and seeding so they observe the same data.
fn build_content_ports(config: &ServerConfig) -> ContentPorts {
    match &config.db_pool {
        Some(pool) => ContentPorts {
            posts: Arc::new(DieselPostRepository::new(pool.clone())),
            categories: Arc::new(DieselCategoryRepository::new(pool.clone())),
            settings: Arc::new(DieselSiteSettingsRepository::new(pool.clone())),
            seed: Arc::new(DieselDemoSeedRepository::new(pool.clone())),
        },
        None => {
            let content = Arc::new(FixtureContentRepository::default());
            ContentPorts {
                posts: content.clone(),
                categories: content.clone(),
                settings: Arc::new(FixtureSiteSettingsRepository::default()),
                seed: content,
            }
        }
    }
}

/// Build the shared HTTP state from the configured ports.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the media root cannot be opened.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let ContentPorts {
        posts,
        categories,
        settings,
        seed,
    } = build_content_ports(config);

    let assets = FsAssetStore::open_ambient(&config.asset_root, &config.base_url)
        .map_err(|error| std::io::Error::other(format!("media root unavailable: {error}")))?;

    Ok(web::Data::new(HttpState::new(HttpStatePorts {
        posts,
        categories,
        settings,
        seed,
        assets: Arc::new(assets) as Arc<dyn AssetStore>,
        login: Arc::new(ConfiguredLoginService::new(config.admin.clone())),
        base_url: config.base_url.clone(),
    })))
}

#[cfg(test)]
mod tests {
    //! Port selection coverage for the state builders.
    use super::*;
    use actix_web::cookie::{Key, SameSite};
    use rstest::rstest;
    use tempfile::TempDir;

    use crate::domain::AdminCredentials;
    use crate::domain::seo::PublicBaseUrl;

    fn fixture_config(asset_root: &TempDir) -> ServerConfig {
        ServerConfig::new(
            Key::generate(),
            false,
            SameSite::Lax,
            "127.0.0.1:0".parse().expect("bind addr"),
            PublicBaseUrl::parse("http://localhost:3000").expect("base url"),
            asset_root.path().to_path_buf(),
            AdminCredentials::try_from_parts("admin", "password").expect("credentials"),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_ports_share_one_content_store() {
        let asset_root = TempDir::new().expect("tempdir");
        let state = build_http_state(&fixture_config(&asset_root)).expect("state");

        let outcome = state.seeder.apply().await.expect("seed fixture");
        let snapshot = state
            .feed
            .home_feed(&crate::domain::feed::CategoryFilter::All, None)
            .await
            .expect("feed");
        assert_eq!(snapshot.total_published, outcome.posts);
    }
}
