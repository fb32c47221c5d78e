//! Category entity and its write payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::ContentValidationError;
use super::validation::{validate_non_empty_field, validate_slug};

/// Accent palette a category's cards render with.
///
/// Stored as lowercase text; unknown stored values degrade to [`ColorTheme::Blue`],
/// the same fallback the feed applies when a post's category is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    /// Blue accent palette, the default.
    #[default]
    Blue,
    /// Pink accent palette.
    Pink,
    /// Yellow accent palette.
    Yellow,
    /// Green accent palette.
    Green,
}

impl ColorTheme {
    /// Lowercase storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }

    /// Parse a stored value, falling back to [`ColorTheme::Blue`] for anything
    /// unrecognised.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Parse a value strictly, rejecting unknown palettes.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "blue" => Some(Self::Blue),
            "pink" => Some(Self::Pink),
            "yellow" => Some(Self::Yellow),
            "green" => Some(Self::Green),
            _ => None,
        }
    }
}

/// Input payload for [`Category::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CategoryDraft {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub color_theme: ColorTheme,
    pub created_at: DateTime<Utc>,
}

/// A content category as read from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Category {
    id: Uuid,
    name: String,
    slug: String,
    color_theme: ColorTheme,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Validate and construct a category.
    pub fn new(draft: CategoryDraft) -> Result<Self, ContentValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }
    pub fn color_theme(&self) -> ColorTheme {
        self.color_theme
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl TryFrom<CategoryDraft> for Category {
    type Error = ContentValidationError;

    fn try_from(draft: CategoryDraft) -> Result<Self, Self::Error> {
        let name = validate_non_empty_field(draft.name, "category.name")?;
        let slug = validate_slug(draft.slug, "category.slug")?;

        Ok(Self {
            id: draft.id,
            name,
            slug,
            color_theme: draft.color_theme,
            created_at: draft.created_at,
        })
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        CategoryDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

/// Validated insert payload handed to the category repository.
///
/// The admin service resolves the slug (caller-supplied or derived from the
/// name) before constructing this type, so adapters can persist it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// Display name.
    pub name: String,
    /// Unique URL-safe identifier.
    pub slug: String,
    /// Accent palette.
    pub color_theme: ColorTheme,
}
