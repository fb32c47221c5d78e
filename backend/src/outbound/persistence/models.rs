//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::content::{
    Category, CategoryDraft, ColorTheme, ContentValidationError, Post, PostDraft, SiteSettings,
    SocialLinks,
};
use crate::domain::layout::CardSize;

use super::schema::{categories, posts, site_settings};

/// Row struct for reading from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub color_theme: String,
    pub created_at: DateTime<Utc>,
}

impl CategoryRow {
    /// Rebuild the validated entity. Unknown stored palettes degrade to the
    /// default instead of failing the read.
    pub(crate) fn into_entity(self) -> Result<Category, ContentValidationError> {
        Category::new(CategoryDraft {
            id: self.id,
            name: self.name,
            slug: self.slug,
            color_theme: ColorTheme::from_stored(&self.color_theme),
            created_at: self.created_at,
        })
    }
}

/// Insertable struct for creating new category records.
///
/// `id` and `created_at` are left to their database defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub(crate) struct NewCategoryRow<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub color_theme: &'a str,
}

/// Row struct for reading from the posts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content_html: String,
    pub thumbnail_url: Option<String>,
    pub read_time: String,
    pub category_id: Uuid,
    pub card_size: String,
    pub is_featured: bool,
    pub published_at: DateTime<Utc>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub og_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostRow {
    /// Rebuild the validated entity. Unknown stored card sizes degrade to
    /// `standard` instead of failing the read.
    pub(crate) fn into_entity(self) -> Result<Post, ContentValidationError> {
        Post::new(PostDraft {
            id: self.id,
            title: self.title,
            slug: self.slug,
            content_html: self.content_html,
            thumbnail_url: self.thumbnail_url,
            read_time: self.read_time,
            category_id: self.category_id,
            card_size: CardSize::from_stored(&self.card_size),
            is_featured: self.is_featured,
            published_at: self.published_at,
            seo_title: self.seo_title,
            seo_description: self.seo_description,
            og_image_url: self.og_image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Insertable struct for creating new post records.
///
/// `id`, `created_at`, and `updated_at` use their database defaults;
/// `published_at` does too unless the caller supplies an explicit stamp
/// (demo seeding fixes the feed order that way).
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub(crate) struct NewPostRow<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub content_html: &'a str,
    pub thumbnail_url: Option<&'a str>,
    pub read_time: &'a str,
    pub category_id: Uuid,
    pub card_size: &'a str,
    pub is_featured: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub seo_title: Option<&'a str>,
    pub seo_description: Option<&'a str>,
    pub og_image_url: Option<&'a str>,
}

/// Changeset struct for the admin's full-replace post update.
///
/// `treat_none_as_null` makes cleared optional fields write NULL rather than
/// being skipped; `published_at` is deliberately absent so updates never move
/// a post in the feed.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = posts)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct PostChangesRow<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub content_html: &'a str,
    pub thumbnail_url: Option<&'a str>,
    pub read_time: &'a str,
    pub category_id: Uuid,
    pub card_size: &'a str,
    pub is_featured: bool,
    pub seo_title: Option<&'a str>,
    pub seo_description: Option<&'a str>,
    pub og_image_url: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

/// Row struct for reading the site settings singleton.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = site_settings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SiteSettingsRow {
    #[expect(dead_code, reason = "fixed-key column; the value is always 1")]
    pub id: i16,
    pub site_name: Option<String>,
    pub site_description: Option<String>,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub footer_text: Option<String>,
    pub hero_title: Option<String>,
    pub hero_description: Option<String>,
    pub author_name: Option<String>,
    pub author_image_url: Option<String>,
    pub about_text: Option<String>,
    pub social_links: Option<serde_json::Value>,
    pub google_analytics_id: Option<String>,
    pub google_tag_manager_id: Option<String>,
    pub google_search_console_code: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl SiteSettingsRow {
    /// Rebuild the settings document. A malformed `social_links` JSON value
    /// reads as an empty map rather than failing the row.
    pub(crate) fn into_entity(self) -> SiteSettings {
        let social_links = self
            .social_links
            .and_then(|value| serde_json::from_value::<SocialLinks>(value).ok())
            .unwrap_or_default();
        SiteSettings {
            site_name: self.site_name,
            site_description: self.site_description,
            logo_url: self.logo_url,
            favicon_url: self.favicon_url,
            footer_text: self.footer_text,
            hero_title: self.hero_title,
            hero_description: self.hero_description,
            author_name: self.author_name,
            author_image_url: self.author_image_url,
            about_text: self.about_text,
            social_links,
            google_analytics_id: self.google_analytics_id,
            google_tag_manager_id: self.google_tag_manager_id,
            google_search_console_code: self.google_search_console_code,
            updated_at: self.updated_at,
        }
    }
}

/// Insert-or-update payload for the settings singleton.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = site_settings)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct SettingsUpsertRow<'a> {
    pub id: i16,
    pub site_name: Option<&'a str>,
    pub site_description: Option<&'a str>,
    pub logo_url: Option<&'a str>,
    pub favicon_url: Option<&'a str>,
    pub footer_text: Option<&'a str>,
    pub hero_title: Option<&'a str>,
    pub hero_description: Option<&'a str>,
    pub author_name: Option<&'a str>,
    pub author_image_url: Option<&'a str>,
    pub about_text: Option<&'a str>,
    pub social_links: Option<serde_json::Value>,
    pub google_analytics_id: Option<&'a str>,
    pub google_tag_manager_id: Option<&'a str>,
    pub google_search_console_code: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}
