//! Post entity and its write payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::validation::{normalize_optional, validate_non_empty_field, validate_slug};
use super::{Category, ContentValidationError};
use crate::domain::layout::CardSize;

/// Input payload for [`Post::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PostDraft {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content_html: String,
    pub thumbnail_url: Option<String>,
    pub read_time: String,
    pub category_id: Uuid,
    pub card_size: CardSize,
    pub is_featured: bool,
    pub published_at: DateTime<Utc>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub og_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A published article as read from the store.
///
/// `content_html` is stored exactly as authored by the admin and served as
/// JSON data; this service renders no HTML of its own, so escaping is the
/// rendering consumer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Post {
    id: Uuid,
    title: String,
    slug: String,
    content_html: String,
    thumbnail_url: Option<String>,
    read_time: String,
    category_id: Uuid,
    card_size: CardSize,
    is_featured: bool,
    published_at: DateTime<Utc>,
    seo_title: Option<String>,
    seo_description: Option<String>,
    og_image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Post {
    /// Validate and construct a post.
    pub fn new(draft: PostDraft) -> Result<Self, ContentValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }
    pub fn content_html(&self) -> &str {
        self.content_html.as_str()
    }
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }
    pub fn read_time(&self) -> &str {
        self.read_time.as_str()
    }
    pub fn category_id(&self) -> Uuid {
        self.category_id
    }
    pub fn card_size(&self) -> CardSize {
        self.card_size
    }
    pub fn is_featured(&self) -> bool {
        self.is_featured
    }
    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }
    pub fn seo_title(&self) -> Option<&str> {
        self.seo_title.as_deref()
    }
    pub fn seo_description(&self) -> Option<&str> {
        self.seo_description.as_deref()
    }
    pub fn og_image_url(&self) -> Option<&str> {
        self.og_image_url.as_deref()
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl TryFrom<PostDraft> for Post {
    type Error = ContentValidationError;

    fn try_from(draft: PostDraft) -> Result<Self, Self::Error> {
        let title = validate_non_empty_field(draft.title, "post.title")?;
        let slug = validate_slug(draft.slug, "post.slug")?;
        let content_html = validate_non_empty_field(draft.content_html, "post.content_html")?;
        let read_time = validate_non_empty_field(draft.read_time, "post.read_time")?;

        Ok(Self {
            id: draft.id,
            title,
            slug,
            content_html,
            thumbnail_url: normalize_optional(draft.thumbnail_url),
            read_time,
            category_id: draft.category_id,
            card_size: draft.card_size,
            is_featured: draft.is_featured,
            published_at: draft.published_at,
            seo_title: normalize_optional(draft.seo_title),
            seo_description: normalize_optional(draft.seo_description),
            og_image_url: normalize_optional(draft.og_image_url),
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        })
    }
}

impl<'de> Deserialize<'de> for Post {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        PostDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

/// A post joined with its owning category.
///
/// The category is optional so readers degrade gracefully if the reference
/// cannot be resolved; the feed substitutes a fallback label and palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostWithCategory {
    /// The post itself.
    pub post: Post,
    /// The owning category, when resolvable.
    pub category: Option<Category>,
}

impl PostWithCategory {
    /// Slug of the owning category, when resolvable.
    #[must_use]
    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_ref().map(Category::slug)
    }
}

/// Validated insert payload handed to the post repository.
///
/// The admin service resolves the slug and normalises optional fields before
/// constructing this type. `published_at` is `None` for ordinary admin
/// creates (the store stamps the current time); seeding supplies explicit
/// values to fix the demo feed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content_html: String,
    pub thumbnail_url: Option<String>,
    pub read_time: String,
    pub category_id: Uuid,
    pub card_size: CardSize,
    pub is_featured: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub og_image_url: Option<String>,
}

/// Validated full-replace update payload handed to the post repository.
///
/// Mirrors the admin edit form: every content field is written; `updated_at`
/// is stamped by the adapter and `published_at` is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub slug: String,
    pub content_html: String,
    pub thumbnail_url: Option<String>,
    pub read_time: String,
    pub category_id: Uuid,
    pub card_size: CardSize,
    pub is_featured: bool,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub og_image_url: Option<String>,
}
