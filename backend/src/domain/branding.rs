//! Settings resolver: stored settings merged over hard defaults.
//!
//! The store may hold no settings row at all; readers never see that state.
//! `EffectiveSettings::resolve` fills every public-facing field, applying the
//! hero fallback chain and templating a copyright line when the footer is
//! unset.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::content::{SiteSettings, SocialLinks};

/// Default brand name when none is configured.
pub const DEFAULT_SITE_NAME: &str = "Sayt.me";

/// Default tagline when none is configured.
pub const DEFAULT_SITE_DESCRIPTION: &str =
    "Marketinq dünyasından ən son xəbərlər, strategiyalar və dərin təhlillər";

/// Fully resolved site-wide configuration served to public readers.
///
/// Unlike [`SiteSettings`], the identity fields here are always present;
/// optional branding extras stay optional and pass through as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveSettings {
    /// Brand name shown in navigation and SEO titles.
    pub site_name: String,
    /// Tagline used as the default meta description.
    pub site_description: String,
    /// Home hero heading.
    pub hero_title: String,
    /// Home hero byline.
    pub hero_description: String,
    /// Footer line, templated with the current year when unset.
    pub footer_text: String,
    /// Logo image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Favicon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    /// Author display name for bylines and structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Author portrait URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_image_url: Option<String>,
    /// About blurb shown on the floating about card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_text: Option<String>,
    /// Social profile links keyed by platform.
    #[serde(default)]
    pub social_links: SocialLinks,
    /// Google Analytics measurement id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_analytics_id: Option<String>,
    /// Google Tag Manager container id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_tag_manager_id: Option<String>,
    /// Google Search Console verification code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search_console_code: Option<String>,
}

fn templated_footer(site_name: &str, now: DateTime<Utc>) -> String {
    format!(
        "© {} {}. Bütün hüquqlar qorunur.",
        now.year(),
        site_name
    )
}

impl EffectiveSettings {
    /// Merge the stored settings (if any) over the hard defaults.
    ///
    /// The hero chain falls through stored hero fields to the stored site
    /// identity to the defaults; stored blank strings were already collapsed
    /// to `None` on write, so presence means meaningful content.
    #[must_use]
    pub fn resolve(stored: Option<&SiteSettings>, now: DateTime<Utc>) -> Self {
        let site_name = stored
            .and_then(|s| s.site_name.clone())
            .unwrap_or_else(|| DEFAULT_SITE_NAME.to_owned());
        let site_description = stored
            .and_then(|s| s.site_description.clone())
            .unwrap_or_else(|| DEFAULT_SITE_DESCRIPTION.to_owned());
        let hero_title = stored
            .and_then(|s| s.hero_title.clone())
            .unwrap_or_else(|| site_name.clone());
        let hero_description = stored
            .and_then(|s| s.hero_description.clone())
            .unwrap_or_else(|| site_description.clone());
        let footer_text = stored
            .and_then(|s| s.footer_text.clone())
            .unwrap_or_else(|| templated_footer(&site_name, now));

        Self {
            site_name,
            site_description,
            hero_title,
            hero_description,
            footer_text,
            logo_url: stored.and_then(|s| s.logo_url.clone()),
            favicon_url: stored.and_then(|s| s.favicon_url.clone()),
            author_name: stored.and_then(|s| s.author_name.clone()),
            author_image_url: stored.and_then(|s| s.author_image_url.clone()),
            about_text: stored.and_then(|s| s.about_text.clone()),
            social_links: stored.map(|s| s.social_links.clone()).unwrap_or_default(),
            google_analytics_id: stored.and_then(|s| s.google_analytics_id.clone()),
            google_tag_manager_id: stored.and_then(|s| s.google_tag_manager_id.clone()),
            google_search_console_code: stored.and_then(|s| s.google_search_console_code.clone()),
        }
    }
}
