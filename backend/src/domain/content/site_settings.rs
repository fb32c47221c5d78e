//! Site settings entity and its write payload.
//!
//! The store holds at most one settings row (fixed primary key); zero rows is
//! the pre-configuration state and the resolver in
//! [`branding`](crate::domain::branding) supplies defaults for it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::normalize_optional;

/// Platform-to-URL map of social profiles, e.g. `{"email": "...", "linkedin": "..."}`.
pub type SocialLinks = BTreeMap<String, String>;

/// The stored site-wide configuration row.
///
/// Every content field is optional; blank strings are normalised to `None`
/// on write so readers only ever observe absent or meaningful values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    /// Brand name shown in navigation and SEO titles.
    pub site_name: Option<String>,
    /// Tagline used as the default meta description.
    pub site_description: Option<String>,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Favicon URL.
    pub favicon_url: Option<String>,
    /// Footer line; the resolver templates a copyright when unset.
    pub footer_text: Option<String>,
    /// Home hero heading; falls back to the site name.
    pub hero_title: Option<String>,
    /// Home hero byline; falls back to the site description.
    pub hero_description: Option<String>,
    /// Author display name for bylines and structured data.
    pub author_name: Option<String>,
    /// Author portrait URL.
    pub author_image_url: Option<String>,
    /// About blurb shown on the floating about card.
    pub about_text: Option<String>,
    /// Social profile links keyed by platform.
    #[serde(default)]
    pub social_links: SocialLinks,
    /// Google Analytics measurement id.
    pub google_analytics_id: Option<String>,
    /// Google Tag Manager container id.
    pub google_tag_manager_id: Option<String>,
    /// Google Search Console verification code.
    pub google_search_console_code: Option<String>,
    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}

/// Full-replace write payload for the settings singleton.
///
/// Matches the admin settings form: the whole document is saved at once, and
/// the adapter inserts or updates the fixed row as needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct SettingsChanges {
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
    #[serde(default)]
    pub social_links: SocialLinks,
    pub google_analytics_id: Option<String>,
    pub google_tag_manager_id: Option<String>,
    pub google_search_console_code: Option<String>,
}

impl SettingsChanges {
    /// Collapse blank strings to `None` and drop social links with blank URLs.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            site_name: normalize_optional(self.site_name),
            site_description: normalize_optional(self.site_description),
            logo_url: normalize_optional(self.logo_url),
            favicon_url: normalize_optional(self.favicon_url),
            footer_text: normalize_optional(self.footer_text),
            hero_title: normalize_optional(self.hero_title),
            hero_description: normalize_optional(self.hero_description),
            author_name: normalize_optional(self.author_name),
            author_image_url: normalize_optional(self.author_image_url),
            about_text: normalize_optional(self.about_text),
            social_links: self
                .social_links
                .into_iter()
                .filter(|(_, url)| !url.trim().is_empty())
                .collect(),
            google_analytics_id: normalize_optional(self.google_analytics_id),
            google_tag_manager_id: normalize_optional(self.google_tag_manager_id),
            google_search_console_code: normalize_optional(self.google_search_console_code),
        }
    }
}
