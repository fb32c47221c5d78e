//! Unit tests for content domain type construction.

use chrono::{TimeZone, Utc};
use rstest::rstest;
use uuid::Uuid;

use super::*;
use crate::domain::layout::CardSize;

fn category_draft() -> CategoryDraft {
    CategoryDraft {
        id: Uuid::new_v4(),
        name: "Texnologiya".to_owned(),
        slug: "tech".to_owned(),
        color_theme: ColorTheme::Yellow,
        created_at: Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).single().expect("valid timestamp"),
    }
}

fn post_draft() -> PostDraft {
    let now = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).single().expect("valid timestamp");
    PostDraft {
        id: Uuid::new_v4(),
        title: "Spotify Wrapped: Məlumatların Hekayəyə Çevrilməsi".to_owned(),
        slug: "spotify-wrapped-strategy".to_owned(),
        content_html: "<p>Spotify Wrapped hər il...</p>".to_owned(),
        thumbnail_url: Some("https://images.example/spotify.jpg".to_owned()),
        read_time: "3 dəq".to_owned(),
        category_id: Uuid::new_v4(),
        card_size: CardSize::Wide,
        is_featured: false,
        published_at: now,
        seo_title: None,
        seo_description: Some("   ".to_owned()),
        og_image_url: None,
        created_at: now,
        updated_at: now,
    }
}

#[rstest]
fn category_accepts_valid_draft() {
    let category = Category::new(category_draft()).expect("draft is valid");
    assert_eq!(category.slug(), "tech");
    assert_eq!(category.color_theme(), ColorTheme::Yellow);
}

#[rstest]
fn category_rejects_invalid_slug() {
    let mut draft = category_draft();
    draft.slug = "Sosial Media".to_owned();
    let result = Category::new(draft);
    assert!(matches!(
        result,
        Err(ContentValidationError::InvalidSlug {
            field: "category.slug",
        })
    ));
}

#[rstest]
fn category_rejects_blank_name() {
    let mut draft = category_draft();
    draft.name = "   ".to_owned();
    let result = Category::new(draft);
    assert!(matches!(
        result,
        Err(ContentValidationError::EmptyField {
            field: "category.name",
        })
    ));
}

#[rstest]
fn post_accepts_valid_draft_and_normalises_blank_optionals() {
    let post = Post::new(post_draft()).expect("draft is valid");
    assert_eq!(post.slug(), "spotify-wrapped-strategy");
    assert_eq!(post.card_size(), CardSize::Wide);
    // A whitespace-only seo_description collapses to None.
    assert_eq!(post.seo_description(), None);
    assert_eq!(
        post.thumbnail_url(),
        Some("https://images.example/spotify.jpg")
    );
}

#[rstest]
#[case("", "post.title")]
#[case("  ", "post.title")]
fn post_rejects_blank_title(#[case] title: &str, #[case] field: &str) {
    let mut draft = post_draft();
    draft.title = title.to_owned();
    match Post::new(draft) {
        Err(ContentValidationError::EmptyField { field: reported }) => {
            assert_eq!(reported, field);
        }
        other => panic!("expected empty-field error, got {other:?}"),
    }
}

#[rstest]
fn post_rejects_invalid_slug() {
    let mut draft = post_draft();
    draft.slug = "Spotify Wrapped".to_owned();
    assert!(matches!(
        Post::new(draft),
        Err(ContentValidationError::InvalidSlug { field: "post.slug" })
    ));
}

#[rstest]
fn post_rejects_blank_content() {
    let mut draft = post_draft();
    draft.content_html = String::new();
    assert!(matches!(
        Post::new(draft),
        Err(ContentValidationError::EmptyField {
            field: "post.content_html",
        })
    ));
}

#[rstest]
fn post_deserialisation_goes_through_validation() {
    let now = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).single().expect("valid timestamp");
    let json = serde_json::json!({
        "id": Uuid::new_v4(),
        "title": "Ok",
        "slug": "NOT A SLUG",
        "contentHtml": "<p>ok</p>",
        "thumbnailUrl": null,
        "readTime": "1 dəq",
        "categoryId": Uuid::new_v4(),
        "cardSize": "standard",
        "isFeatured": false,
        "publishedAt": now,
        "seoTitle": null,
        "seoDescription": null,
        "ogImageUrl": null,
        "createdAt": now,
        "updatedAt": now,
    });
    let result: Result<Post, _> = serde_json::from_value(json);
    assert!(result.is_err());
}

#[rstest]
fn post_with_category_exposes_category_slug() {
    let category = Category::new(category_draft()).expect("draft is valid");
    let mut draft = post_draft();
    draft.category_id = category.id();
    let post = Post::new(draft).expect("draft is valid");

    let joined = PostWithCategory {
        post,
        category: Some(category),
    };
    assert_eq!(joined.category_slug(), Some("tech"));

    let dangling = PostWithCategory {
        category: None,
        ..joined
    };
    assert_eq!(dangling.category_slug(), None);
}

#[rstest]
#[case("blue", ColorTheme::Blue)]
#[case("pink", ColorTheme::Pink)]
#[case("yellow", ColorTheme::Yellow)]
#[case("green", ColorTheme::Green)]
#[case("magenta", ColorTheme::Blue)]
#[case("", ColorTheme::Blue)]
fn color_theme_parses_with_blue_fallback(#[case] stored: &str, #[case] expected: ColorTheme) {
    assert_eq!(ColorTheme::from_stored(stored), expected);
}

#[rstest]
fn settings_changes_normalisation_drops_blanks() {
    let changes = SettingsChanges {
        site_name: Some("Sayt.me".to_owned()),
        site_description: Some("   ".to_owned()),
        footer_text: None,
        social_links: [
            ("email".to_owned(), "mailto:salam@sayt.me".to_owned()),
            ("linkedin".to_owned(), "  ".to_owned()),
        ]
        .into_iter()
        .collect(),
        ..SettingsChanges::default()
    };

    let normalized = changes.normalized();
    assert_eq!(normalized.site_name.as_deref(), Some("Sayt.me"));
    assert_eq!(normalized.site_description, None);
    assert_eq!(normalized.social_links.len(), 1);
    assert!(normalized.social_links.contains_key("email"));
}
