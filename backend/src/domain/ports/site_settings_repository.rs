//! Port for the site settings singleton.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::content::{SettingsChanges, SiteSettings};

use super::define_port_error;

define_port_error! {
    /// Errors raised by site settings repository adapters.
    pub enum SiteSettingsRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "settings repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "settings repository query failed: {message}",
    }
}

/// Port for the single stored settings document.
///
/// The store holds at most one row. `current` returns `None` until the first
/// write; `upsert` creates or replaces the row atomically so concurrent
/// writers cannot produce a second one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteSettingsRepository: Send + Sync {
    /// The stored settings, if any have been saved.
    async fn current(&self) -> Result<Option<SiteSettings>, SiteSettingsRepositoryError>;

    /// Insert or fully replace the settings row, returning the stored state.
    async fn upsert(
        &self,
        changes: SettingsChanges,
    ) -> Result<SiteSettings, SiteSettingsRepositoryError>;
}

/// In-memory settings store used for tests and database-less operation.
#[derive(Debug, Default)]
pub struct FixtureSiteSettingsRepository {
    settings: RwLock<Option<SiteSettings>>,
}

#[async_trait]
impl SiteSettingsRepository for FixtureSiteSettingsRepository {
    async fn current(&self) -> Result<Option<SiteSettings>, SiteSettingsRepositoryError> {
        Ok(self.settings.read().await.clone())
    }

    async fn upsert(
        &self,
        changes: SettingsChanges,
    ) -> Result<SiteSettings, SiteSettingsRepositoryError> {
        let normalized = changes.normalized();
        let stored = SiteSettings {
            site_name: normalized.site_name,
            site_description: normalized.site_description,
            logo_url: normalized.logo_url,
            favicon_url: normalized.favicon_url,
            footer_text: normalized.footer_text,
            hero_title: normalized.hero_title,
            hero_description: normalized.hero_description,
            author_name: normalized.author_name,
            author_image_url: normalized.author_image_url,
            about_text: normalized.about_text,
            social_links: normalized.social_links,
            google_analytics_id: normalized.google_analytics_id,
            google_tag_manager_id: normalized.google_tag_manager_id,
            google_search_console_code: normalized.google_search_console_code,
            updated_at: Utc::now(),
        };
        *self.settings.write().await = Some(stored.clone());
        Ok(stored)
    }
}
