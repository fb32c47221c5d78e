//! Demo content seeding: the curated dataset applied through its port.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use demo_content::{ColorThemeSeed, LayoutSizeSeed, demo_categories, demo_posts};

use crate::domain::Error;
use crate::domain::content::{ColorTheme, NewCategory};
use crate::domain::layout::CardSize;
use crate::domain::ports::{
    DemoSeedBundle, DemoSeedOutcome, DemoSeedPost, DemoSeedRepository, DemoSeedRepositoryError,
    staggered_published_at,
};

fn color_theme(seed: ColorThemeSeed) -> ColorTheme {
    match seed {
        ColorThemeSeed::Blue => ColorTheme::Blue,
        ColorThemeSeed::Pink => ColorTheme::Pink,
        ColorThemeSeed::Yellow => ColorTheme::Yellow,
        ColorThemeSeed::Green => ColorTheme::Green,
    }
}

fn card_size(seed: LayoutSizeSeed) -> CardSize {
    match seed {
        LayoutSizeSeed::Standard => CardSize::Standard,
        LayoutSizeSeed::Hero => CardSize::Hero,
        LayoutSizeSeed::Wide => CardSize::Wide,
        LayoutSizeSeed::Square => CardSize::Square,
    }
}

/// Build the demo bundle, stamping publication times backwards from `base`
/// so the dataset's listed order is its feed order.
#[must_use]
pub fn demo_bundle(base: DateTime<Utc>) -> DemoSeedBundle {
    let categories = demo_categories()
        .into_iter()
        .map(|record| NewCategory {
            name: record.name.to_owned(),
            slug: record.slug.to_owned(),
            color_theme: color_theme(record.color_theme),
        })
        .collect();
    let posts = demo_posts()
        .into_iter()
        .enumerate()
        .map(|(index, record)| DemoSeedPost {
            title: record.title.to_owned(),
            slug: record.slug.to_owned(),
            content_html: record.content_html.to_owned(),
            thumbnail_url: Some(record.thumbnail_url.to_owned()),
            read_time: record.read_time.to_owned(),
            category_slug: record.category_slug.to_owned(),
            card_size: card_size(record.card_size),
            is_featured: record.is_featured,
            published_at: staggered_published_at(base, index),
        })
        .collect();
    DemoSeedBundle { categories, posts }
}

/// Applies the demo dataset idempotently.
pub struct DemoContentSeeder {
    seed: Arc<dyn DemoSeedRepository>,
}

impl DemoContentSeeder {
    /// Create the seeder over its repository.
    pub fn new(seed: Arc<dyn DemoSeedRepository>) -> Self {
        Self { seed }
    }

    fn map_error(err: DemoSeedRepositoryError) -> Error {
        match err {
            DemoSeedRepositoryError::Connection { message } => {
                tracing::warn!(error = %message, "seed repository unavailable");
                Error::service_unavailable("content store unavailable")
            }
            DemoSeedRepositoryError::Query { message } => {
                tracing::error!(error = %message, "seed run failed");
                Error::internal("demo content seeding failed")
            }
        }
    }

    /// Apply the bundle; a second run reports `AlreadySeeded` and changes
    /// nothing.
    pub async fn apply(&self) -> Result<DemoSeedOutcome, Error> {
        let outcome = self
            .seed
            .apply(demo_bundle(Utc::now()))
            .await
            .map_err(Self::map_error)?;
        tracing::info!(
            result = ?outcome.result,
            categories = outcome.categories,
            posts = outcome.posts,
            "demo content seed run finished"
        );
        Ok(outcome)
    }
}
