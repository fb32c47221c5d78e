//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod asset_store;
mod category_repository;
mod demo_seed_repository;
mod fixture_content;
mod login_service;
mod post_repository;
mod site_settings_repository;

#[cfg(test)]
pub use asset_store::MockAssetStore;
pub use asset_store::{AssetContent, AssetStore, AssetStoreError, StoredAsset, StoredAssetHandle};
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use demo_seed_repository::MockDemoSeedRepository;
pub use demo_seed_repository::{
    DemoSeedBundle, DemoSeedOutcome, DemoSeedPost, DemoSeedRepository, DemoSeedRepositoryError,
    SeedApplication, staggered_published_at,
};
pub use fixture_content::FixtureContentRepository;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{ConfiguredLoginService, LoginService};
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::{PostCounts, PostQuery, PostRepository, PostRepositoryError};
#[cfg(test)]
pub use site_settings_repository::MockSiteSettingsRepository;
pub use site_settings_repository::{
    FixtureSiteSettingsRepository, SiteSettingsRepository, SiteSettingsRepositoryError,
};
