//! Startup seeding orchestration.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ports::DemoSeedOutcome;
use crate::domain::{DemoContentSeeder, Error};
use crate::outbound::persistence::{DbPool, DieselDemoSeedRepository};
use crate::seeding::config::DemoContentSettings;

/// Apply the demo dataset on startup when enabled.
///
/// Seeding is idempotent, so restarts of an already-seeded deployment log
/// `AlreadySeeded` and change nothing. Without a database pool (fixture
/// mode) startup seeding is skipped; the in-memory fixture seeds itself
/// through the admin endpoint instead.
///
/// # Errors
///
/// Propagates the seeder's [`Error`] when the seed run fails; the caller
/// treats that as fatal so a half-configured deployment does not start.
///
/// # Examples
///
/// ```rust,no_run
/// use backend::seeding::{DemoContentSettings, seed_demo_content_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = DemoContentSettings { enabled: false };
/// let outcome = seed_demo_content_on_startup(&settings, None).await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_demo_content_on_startup(
    settings: &DemoContentSettings,
    db_pool: Option<&DbPool>,
) -> Result<Option<DemoSeedOutcome>, Error> {
    if !settings.enabled {
        info!(reason = "disabled", "demo content seeding skipped");
        return Ok(None);
    }

    let Some(db_pool) = db_pool else {
        warn!("demo content seeding enabled but DATABASE_URL is missing; skipping");
        return Ok(None);
    };

    let repository = DieselDemoSeedRepository::new(db_pool.clone());
    let seeder = DemoContentSeeder::new(Arc::new(repository));
    let outcome = seeder.apply().await?;

    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    //! Startup seeding skip-path coverage.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn disabled_settings_skip_seeding() {
        let settings = DemoContentSettings { enabled: false };
        let outcome = seed_demo_content_on_startup(&settings, None)
            .await
            .expect("skip is not an error");
        assert!(outcome.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn enabled_without_a_pool_skips_seeding() {
        let settings = DemoContentSettings { enabled: true };
        let outcome = seed_demo_content_on_startup(&settings, None)
            .await
            .expect("skip is not an error");
        assert!(outcome.is_none());
    }
}
