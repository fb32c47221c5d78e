//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Content categories table.
    ///
    /// Each category owns zero or more posts through `posts.category_id`;
    /// the foreign key restricts deletion while references remain.
    categories (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display name shown in navigation and on cards.
        name -> Text,
        /// URL-safe unique identifier.
        slug -> Text,
        /// Accent palette name, lowercase.
        color_theme -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Published articles table.
    posts (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Article title.
        title -> Text,
        /// URL-safe unique identifier.
        slug -> Text,
        /// Article body, stored as authored.
        content_html -> Text,
        /// Cover image URL.
        thumbnail_url -> Nullable<Text>,
        /// Reading-time label.
        read_time -> Text,
        /// Owning category.
        category_id -> Uuid,
        /// Bento card size name, lowercase.
        card_size -> Text,
        /// Featured flag for the dashboard count and card badge.
        is_featured -> Bool,
        /// Publication timestamp; feed order.
        published_at -> Timestamptz,
        /// Explicit SEO title override.
        seo_title -> Nullable<Text>,
        /// Explicit SEO description override.
        seo_description -> Nullable<Text>,
        /// Explicit OpenGraph image override.
        og_image_url -> Nullable<Text>,
        /// Record creation timestamp; admin table order.
        created_at -> Timestamptz,
        /// Last modification timestamp, stamped on every update.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Site settings singleton table.
    ///
    /// Holds at most one row: a fixed primary key with a CHECK constraint
    /// (`id = 1`). Zero rows is the pre-configuration state.
    site_settings (id) {
        /// Fixed primary key, always `1`.
        id -> SmallInt,
        /// Brand name.
        site_name -> Nullable<Text>,
        /// Tagline and default meta description.
        site_description -> Nullable<Text>,
        /// Logo image URL.
        logo_url -> Nullable<Text>,
        /// Favicon URL.
        favicon_url -> Nullable<Text>,
        /// Footer line.
        footer_text -> Nullable<Text>,
        /// Home hero heading.
        hero_title -> Nullable<Text>,
        /// Home hero byline.
        hero_description -> Nullable<Text>,
        /// Author display name.
        author_name -> Nullable<Text>,
        /// Author portrait URL.
        author_image_url -> Nullable<Text>,
        /// About blurb.
        about_text -> Nullable<Text>,
        /// Social profile links keyed by platform.
        social_links -> Nullable<Jsonb>,
        /// Google Analytics measurement id.
        google_analytics_id -> Nullable<Text>,
        /// Google Tag Manager container id.
        google_tag_manager_id -> Nullable<Text>,
        /// Google Search Console verification code.
        google_search_console_code -> Nullable<Text>,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(posts -> categories (category_id));

diesel::allow_tables_to_appear_in_same_query!(categories, posts);
