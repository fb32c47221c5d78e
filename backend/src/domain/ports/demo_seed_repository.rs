//! Port for applying the demo content dataset.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::content::NewCategory;
use crate::domain::layout::CardSize;

use super::define_port_error;

define_port_error! {
    /// Errors raised by demo seed repository adapters.
    pub enum DemoSeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "seed repository connection failed: {message}",
        /// Seeding failed mid-way; the adapter must have rolled back.
        Query { message: String } =>
            "seed repository query failed: {message}",
    }
}

/// A demo post linked to its category by slug.
///
/// Category identifiers are assigned by the store, so the bundle links posts
/// to categories by slug and the adapter resolves ids at apply time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSeedPost {
    pub title: String,
    pub slug: String,
    pub content_html: String,
    pub thumbnail_url: Option<String>,
    pub read_time: String,
    /// Slug of the owning category within the same bundle.
    pub category_slug: String,
    pub card_size: CardSize,
    pub is_featured: bool,
    /// Pre-assigned so the demo feed order is fixed, not load-time dependent.
    pub published_at: DateTime<Utc>,
}

/// The full dataset a seed run applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSeedBundle {
    /// Categories to create, in navigation order.
    pub categories: Vec<NewCategory>,
    /// Posts to create, referencing bundle categories by slug.
    pub posts: Vec<DemoSeedPost>,
}

/// Whether a seed run changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedApplication {
    /// The dataset was written.
    Applied,
    /// The dataset (or part of it) was already present; nothing was written.
    AlreadySeeded,
}

/// Result of a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSeedOutcome {
    /// Whether anything was written.
    pub result: SeedApplication,
    /// Categories present after the run.
    pub categories: usize,
    /// Posts present after the run.
    pub posts: usize,
}

/// Port for idempotent demo data seeding.
///
/// `apply` runs in a single transaction: either the whole bundle lands or
/// nothing does. A bundle any of whose post slugs already exist reports
/// [`SeedApplication::AlreadySeeded`] without writing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DemoSeedRepository: Send + Sync {
    /// Apply the bundle if none of its posts exist yet.
    async fn apply(
        &self,
        bundle: DemoSeedBundle,
    ) -> Result<DemoSeedOutcome, DemoSeedRepositoryError>;
}

/// Publication timestamp for the `index`-th bundle post, counting back one
/// day per position from `base` so the first record lists newest.
#[must_use]
pub fn staggered_published_at(base: DateTime<Utc>, index: usize) -> DateTime<Utc> {
    base - chrono::Duration::days(i64::try_from(index).unwrap_or(i64::MAX))
}
