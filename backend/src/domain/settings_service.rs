//! Settings service: cached reads and fixed-row writes.
//!
//! Every public page resolves settings, so reads go through a process-local
//! cache. There is no TTL; correctness comes from invalidating on the only
//! write path before the write call returns.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::Error;
use crate::domain::branding::EffectiveSettings;
use crate::domain::content::{SettingsChanges, SiteSettings};
use crate::domain::ports::{SiteSettingsRepository, SiteSettingsRepositoryError};

/// Serves resolved and stored settings with a read-through cache.
pub struct SettingsService {
    repo: Arc<dyn SiteSettingsRepository>,
    // Outer None: cache cold. Inner None: store confirmed empty.
    cached: RwLock<Option<Option<SiteSettings>>>,
}

impl SettingsService {
    /// Create the service over its repository.
    pub fn new(repo: Arc<dyn SiteSettingsRepository>) -> Self {
        Self {
            repo,
            cached: RwLock::new(None),
        }
    }

    fn map_error(err: SiteSettingsRepositoryError) -> Error {
        match err {
            SiteSettingsRepositoryError::Connection { message } => {
                tracing::warn!(error = %message, "settings repository unavailable");
                Error::service_unavailable("settings store unavailable")
            }
            SiteSettingsRepositoryError::Query { message } => {
                tracing::error!(error = %message, "settings repository failure");
                Error::internal("failed to load settings")
            }
        }
    }

    /// The stored settings row, if one was ever written.
    pub async fn stored(&self) -> Result<Option<SiteSettings>, Error> {
        if let Some(cached) = self.cached.read().await.clone() {
            return Ok(cached);
        }
        let fetched = self.repo.current().await.map_err(Self::map_error)?;
        *self.cached.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    /// Resolved settings for public readers.
    pub async fn effective(&self, now: DateTime<Utc>) -> Result<EffectiveSettings, Error> {
        let stored = self.stored().await?;
        Ok(EffectiveSettings::resolve(stored.as_ref(), now))
    }

    /// Replace the settings document and refresh the cache before returning.
    pub async fn update(&self, changes: SettingsChanges) -> Result<SiteSettings, Error> {
        let stored = self.repo.upsert(changes).await.map_err(Self::map_error)?;
        *self.cached.write().await = Some(Some(stored.clone()));
        Ok(stored)
    }
}
