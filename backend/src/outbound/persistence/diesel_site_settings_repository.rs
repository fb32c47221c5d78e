//! PostgreSQL-backed site settings adapter.
//!
//! The table holds a single fixed-key row (`id = 1`, enforced by a check
//! constraint). `upsert` uses `ON CONFLICT` on that key so concurrent
//! writers race on one row instead of creating a second.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::content::{SettingsChanges, SiteSettings};
use crate::domain::ports::{SiteSettingsRepository, SiteSettingsRepositoryError};

use super::diesel_error_mapping::{map_content_diesel_error, map_content_pool_error};
use super::models::{SettingsUpsertRow, SiteSettingsRow};
use super::pool::{DbPool, PoolError};
use super::schema::site_settings;

const SETTINGS_ROW_ID: i16 = 1;

/// Diesel-backed implementation of the site settings port.
#[derive(Clone)]
pub struct DieselSiteSettingsRepository {
    pool: DbPool,
}

impl DieselSiteSettingsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SiteSettingsRepositoryError {
    map_content_pool_error(error, SiteSettingsRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> SiteSettingsRepositoryError {
    map_content_diesel_error(
        error,
        SiteSettingsRepositoryError::query,
        SiteSettingsRepositoryError::connection,
    )
}

#[async_trait]
impl SiteSettingsRepository for DieselSiteSettingsRepository {
    async fn current(&self) -> Result<Option<SiteSettings>, SiteSettingsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<SiteSettingsRow> = site_settings::table
            .find(SETTINGS_ROW_ID)
            .select(SiteSettingsRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(SiteSettingsRow::into_entity))
    }

    async fn upsert(
        &self,
        changes: SettingsChanges,
    ) -> Result<SiteSettings, SiteSettingsRepositoryError> {
        let normalized = changes.normalized();
        let social_links = if normalized.social_links.is_empty() {
            None
        } else {
            Some(
                serde_json::to_value(&normalized.social_links)
                    .map_err(|error| SiteSettingsRepositoryError::query(error.to_string()))?,
            )
        };

        let row = SettingsUpsertRow {
            id: SETTINGS_ROW_ID,
            site_name: normalized.site_name.as_deref(),
            site_description: normalized.site_description.as_deref(),
            logo_url: normalized.logo_url.as_deref(),
            favicon_url: normalized.favicon_url.as_deref(),
            footer_text: normalized.footer_text.as_deref(),
            hero_title: normalized.hero_title.as_deref(),
            hero_description: normalized.hero_description.as_deref(),
            author_name: normalized.author_name.as_deref(),
            author_image_url: normalized.author_image_url.as_deref(),
            about_text: normalized.about_text.as_deref(),
            social_links,
            google_analytics_id: normalized.google_analytics_id.as_deref(),
            google_tag_manager_id: normalized.google_tag_manager_id.as_deref(),
            google_search_console_code: normalized.google_search_console_code.as_deref(),
            updated_at: Utc::now(),
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let stored: SiteSettingsRow = diesel::insert_into(site_settings::table)
            .values(&row)
            .on_conflict(site_settings::id)
            .do_update()
            .set(&row)
            .returning(SiteSettingsRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(stored.into_entity())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for settings repository error mapping.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let error = map_pool_error(PoolError::checkout("pool exhausted"));
        assert!(matches!(
            error,
            SiteSettingsRepositoryError::Connection { .. }
        ));
    }

    #[rstest]
    fn query_failures_map_to_query_errors() {
        let error = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(error, SiteSettingsRepositoryError::Query { .. }));
    }
}
