//! Feed composition: turning stored posts into display cards.
//!
//! Composition is pure so it can be exercised without a store. The service
//! layer fetches posts (already newest first) and this module applies the
//! category and search filters, then projects each post into the card shape
//! the bento grid renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::content::{ColorTheme, PostWithCategory};
use crate::domain::layout::LayoutSpan;

/// Label shown on a card whose category reference cannot be resolved.
pub const FALLBACK_CATEGORY_LABEL: &str = "Bloq";

/// Category filter parsed from the feed query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No filtering; every post qualifies.
    #[default]
    All,
    /// Only posts whose category has this slug.
    Slug(String),
}

impl CategoryFilter {
    /// Parse a raw query value. Absent, blank, and the literal `all` mean no
    /// filtering; anything else filters by that slug.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => Self::All,
            Some(slug) => Self::Slug(slug.to_owned()),
        }
    }

    /// The slug to filter by, if any.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Slug(slug) => Some(slug.as_str()),
        }
    }

    fn matches(&self, entry: &PostWithCategory) -> bool {
        match self {
            Self::All => true,
            Self::Slug(slug) => entry.category_slug() == Some(slug.as_str()),
        }
    }
}

/// A single card in the bento feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCard {
    /// Post identifier, for admin deep links.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Post slug for the detail link.
    pub slug: String,
    /// Category display name, or the fallback label when unresolvable.
    pub category_label: String,
    /// Category slug, absent when the reference is unresolvable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
    /// Accent palette, degraded to the default for unresolvable categories.
    pub color_theme: ColorTheme,
    /// Reading-time label, e.g. `5 dəq`.
    pub read_time: String,
    /// Cover image URL, absent for icon cards and imageless posts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Grid footprint.
    pub layout: LayoutSpan,
    /// Whether the card renders an icon instead of its image.
    pub shows_icon: bool,
    /// Whether the post is flagged as featured.
    pub is_featured: bool,
    /// Publication timestamp the feed is ordered by.
    pub published_at: DateTime<Utc>,
}

impl DisplayCard {
    /// Project a stored post into its card.
    #[must_use]
    pub fn from_post(entry: &PostWithCategory) -> Self {
        let size = entry.post.card_size();
        let (category_label, category_slug, color_theme) = match entry.category.as_ref() {
            Some(category) => (
                category.name().to_owned(),
                Some(category.slug().to_owned()),
                category.color_theme(),
            ),
            None => (FALLBACK_CATEGORY_LABEL.to_owned(), None, ColorTheme::default()),
        };
        Self {
            id: entry.post.id(),
            title: entry.post.title().to_owned(),
            slug: entry.post.slug().to_owned(),
            category_label,
            category_slug,
            color_theme,
            read_time: entry.post.read_time().to_owned(),
            image_url: if size.shows_icon() {
                None
            } else {
                entry.post.thumbnail_url().map(str::to_owned)
            },
            layout: size.span(),
            shows_icon: size.shows_icon(),
            is_featured: entry.post.is_featured(),
            published_at: entry.post.published_at(),
        }
    }
}

/// Apply the category and search filters and project the survivors.
///
/// `posts` must already be ordered newest first; composition preserves the
/// incoming order. The search needle matches the title case-insensitively
/// and a blank needle means no search filtering.
#[must_use]
pub fn compose_feed(
    posts: &[PostWithCategory],
    filter: &CategoryFilter,
    search: Option<&str>,
) -> Vec<DisplayCard> {
    let needle = search
        .map(str::trim)
        .filter(|needle| !needle.is_empty())
        .map(str::to_lowercase);
    posts
        .iter()
        .filter(|entry| filter.matches(entry))
        .filter(|entry| match needle.as_deref() {
            Some(needle) => entry.post.title().to_lowercase().contains(needle),
            None => true,
        })
        .map(DisplayCard::from_post)
        .collect()
}
