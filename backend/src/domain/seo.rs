//! SEO metadata derivation for the feed and post detail pages.
//!
//! Nothing here is stored; every value is derived per request from the post,
//! the resolved settings, and the configured public base URL. Consumers embed
//! the result into their document head verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::Url;
use utoipa::ToSchema;

use crate::domain::branding::EffectiveSettings;
use crate::domain::content::PostWithCategory;

/// OpenGraph locale for all pages.
pub const OG_LOCALE: &str = "az_AZ";

/// Twitter card style for all pages.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Maximum plain-text excerpt length used for derived descriptions.
const EXCERPT_MAX_CHARS: usize = 160;

/// The configured public origin pages are canonicalised against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicBaseUrl(Url);

impl PublicBaseUrl {
    /// Parse and validate the configured base URL.
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        Url::parse(raw).map(Self)
    }

    /// Absolute URL for a site path such as `/post/{slug}`.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        self.0
            .join(path)
            .map_or_else(|_| format!("{}{path}", self.0), |url| url.to_string())
    }

    /// The origin itself, as served for the feed's canonical URL.
    #[must_use]
    pub fn root(&self) -> String {
        self.join("/")
    }
}

impl std::fmt::Display for PublicBaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derived document-head metadata for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Full `<title>` content.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Canonical absolute URL.
    pub canonical_url: String,
    /// OpenGraph object type: `website` for the feed, `article` for posts.
    pub og_type: String,
    /// OpenGraph site name.
    pub og_site_name: String,
    /// OpenGraph locale.
    pub og_locale: String,
    /// OpenGraph image, when any image is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    /// Twitter card style.
    pub twitter_card: String,
    /// JSON-LD structured data objects for the page.
    #[schema(value_type = Vec<Object>)]
    pub json_ld: Vec<Value>,
}

/// Compose a meta title, avoiding doubled site names.
fn meta_title(page_title: &str, site_name: &str) -> String {
    if page_title.contains(site_name) {
        page_title.to_owned()
    } else {
        format!("{page_title} | {site_name}")
    }
}

/// Reduce an HTML fragment to a bounded plain-text excerpt.
///
/// Tags are dropped, whitespace is collapsed, and the result is cut at a
/// character boundary with an ellipsis when the text ran longer.
#[must_use]
pub fn excerpt(content_html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    let mut last_was_space = true;
    for ch in content_html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                if !last_was_space {
                    text.push(' ');
                    last_was_space = true;
                }
            }
            _ if in_tag => {}
            ch if ch.is_whitespace() => {
                if !last_was_space {
                    text.push(' ');
                    last_was_space = true;
                }
            }
            ch => {
                text.push(ch);
                last_was_space = false;
            }
        }
    }
    let text = text.trim();
    if text.chars().count() <= EXCERPT_MAX_CHARS {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(EXCERPT_MAX_CHARS).collect();
    cut.push('…');
    cut
}

/// Metadata for the home feed page.
#[must_use]
pub fn feed_metadata(settings: &EffectiveSettings, base: &PublicBaseUrl) -> PageMetadata {
    let canonical = base.root();
    let website = json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": settings.site_name,
        "description": settings.site_description,
        "url": canonical,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}?search={{search_term_string}}", canonical),
            "query-input": "required name=search_term_string",
        },
    });
    PageMetadata {
        title: meta_title(&settings.hero_title, &settings.site_name),
        description: settings.site_description.clone(),
        canonical_url: canonical,
        og_type: "website".to_owned(),
        og_site_name: settings.site_name.clone(),
        og_locale: OG_LOCALE.to_owned(),
        og_image: settings.logo_url.clone(),
        twitter_card: TWITTER_CARD.to_owned(),
        json_ld: vec![website],
    }
}

/// Metadata for a post detail page.
#[must_use]
pub fn post_metadata(
    entry: &PostWithCategory,
    settings: &EffectiveSettings,
    base: &PublicBaseUrl,
) -> PageMetadata {
    let post = &entry.post;
    let canonical = base.join(&format!("/post/{}", post.slug()));
    let title = post.seo_title().unwrap_or_else(|| post.title());
    let description = post
        .seo_description()
        .map(str::to_owned)
        .unwrap_or_else(|| {
            let text = excerpt(post.content_html());
            if text.is_empty() {
                settings.site_description.clone()
            } else {
                text
            }
        });
    let image = post
        .og_image_url()
        .or_else(|| post.thumbnail_url())
        .map(str::to_owned)
        .or_else(|| settings.logo_url.clone());

    let mut blog_posting = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title(),
        "description": description,
        "url": canonical,
        "datePublished": post.published_at().to_rfc3339(),
        "dateModified": post.updated_at().to_rfc3339(),
        "publisher": {
            "@type": "Organization",
            "name": settings.site_name,
        },
    });
    if let Some(image_url) = image.as_deref() {
        blog_posting["image"] = json!(image_url);
    }
    if let Some(author) = settings.author_name.as_deref() {
        blog_posting["author"] = json!({ "@type": "Person", "name": author });
    }
    if let Some(logo) = settings.logo_url.as_deref() {
        blog_posting["publisher"]["logo"] =
            json!({ "@type": "ImageObject", "url": logo });
    }

    let mut breadcrumbs = vec![json!({
        "@type": "ListItem",
        "position": 1,
        "name": settings.site_name,
        "item": base.root(),
    })];
    if let Some(category) = entry.category.as_ref() {
        breadcrumbs.push(json!({
            "@type": "ListItem",
            "position": 2,
            "name": category.name(),
            "item": base.join(&format!("/?category={}", category.slug())),
        }));
    }
    breadcrumbs.push(json!({
        "@type": "ListItem",
        "position": breadcrumbs.len() + 1,
        "name": post.title(),
        "item": canonical,
    }));
    let breadcrumb_list = json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": breadcrumbs,
    });

    PageMetadata {
        title: meta_title(title, &settings.site_name),
        description,
        canonical_url: canonical,
        og_type: "article".to_owned(),
        og_site_name: settings.site_name.clone(),
        og_locale: OG_LOCALE.to_owned(),
        og_image: image,
        twitter_card: TWITTER_CARD.to_owned(),
        json_ld: vec![blog_posting, breadcrumb_list],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{
        Category, CategoryDraft, ColorTheme, Post, PostDraft,
    };
    use crate::domain::layout::CardSize;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use uuid::Uuid;

    fn base() -> PublicBaseUrl {
        PublicBaseUrl::parse("https://sayt.me").expect("valid base url")
    }

    fn settings() -> EffectiveSettings {
        EffectiveSettings::resolve(None, Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 0).single().expect("timestamp"))
    }

    fn entry(seo_title: Option<&str>, seo_description: Option<&str>) -> PostWithCategory {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).single().expect("timestamp");
        let category = Category::new(CategoryDraft {
            id: Uuid::new_v4(),
            name: "Brendinq".to_owned(),
            slug: "branding".to_owned(),
            color_theme: ColorTheme::Pink,
            created_at: now,
        })
        .expect("valid category");
        let post = Post::new(PostDraft {
            id: Uuid::new_v4(),
            title: "Nike kampaniyası".to_owned(),
            slug: "nike".to_owned(),
            content_html: "<h2>Giriş</h2><p>Uzun təhlil mətni.</p>".to_owned(),
            thumbnail_url: Some("https://images.example/nike.jpg".to_owned()),
            read_time: "5 dəq".to_owned(),
            category_id: category.id(),
            card_size: CardSize::Hero,
            is_featured: true,
            published_at: now,
            seo_title: seo_title.map(str::to_owned),
            seo_description: seo_description.map(str::to_owned),
            og_image_url: None,
            created_at: now,
            updated_at: now,
        })
        .expect("valid post");
        PostWithCategory {
            post,
            category: Some(category),
        }
    }

    #[rstest]
    fn excerpt_strips_tags_and_collapses_whitespace() {
        let text = excerpt("<h2>Giriş</h2>\n<p>Birinci   cümlə.</p>");
        assert_eq!(text, "Giriş Birinci cümlə.");
    }

    #[rstest]
    fn excerpt_truncates_long_content_on_a_char_boundary() {
        let long = format!("<p>{}</p>", "ə".repeat(500));
        let text = excerpt(&long);
        assert_eq!(text.chars().count(), 161);
        assert!(text.ends_with('…'));
    }

    #[rstest]
    fn post_title_is_suffixed_with_the_site_name() {
        let meta = post_metadata(&entry(None, None), &settings(), &base());
        assert_eq!(meta.title, "Nike kampaniyası | Sayt.me");
    }

    #[rstest]
    fn title_already_containing_site_name_is_left_alone() {
        let meta = post_metadata(
            &entry(Some("Nike | Sayt.me"), None),
            &settings(),
            &base(),
        );
        assert_eq!(meta.title, "Nike | Sayt.me");
    }

    #[rstest]
    fn post_description_prefers_the_stored_seo_field() {
        let meta = post_metadata(&entry(None, Some("hazır təsvir")), &settings(), &base());
        assert_eq!(meta.description, "hazır təsvir");
    }

    #[rstest]
    fn post_json_ld_carries_blog_posting_and_breadcrumbs() {
        let meta = post_metadata(&entry(None, None), &settings(), &base());
        let types: Vec<&str> = meta
            .json_ld
            .iter()
            .filter_map(|object| object.get("@type").and_then(Value::as_str))
            .collect();
        assert_eq!(types, vec!["BlogPosting", "BreadcrumbList"]);
        assert_eq!(meta.og_type, "article");
        assert_eq!(meta.canonical_url, "https://sayt.me/post/nike");
    }

    #[rstest]
    fn feed_json_ld_is_a_website_with_search_action() {
        let meta = feed_metadata(&settings(), &base());
        let website = meta.json_ld.first().expect("one object");
        assert_eq!(website.get("@type").and_then(Value::as_str), Some("WebSite"));
        assert!(website.get("potentialAction").is_some());
        assert_eq!(meta.og_locale, "az_AZ");
        assert_eq!(meta.canonical_url, "https://sayt.me/");
    }
}
