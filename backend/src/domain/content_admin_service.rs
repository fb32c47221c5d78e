//! Write-side service behind the admin console.
//!
//! Validation happens here, before any repository call: required fields,
//! slug resolution (caller-supplied or derived from the display text), and
//! strict enum parsing. Failures carry field-level details so the console can
//! highlight the offending input.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::content::{
    Category, ColorTheme, NewCategory, NewPost, PostChanges, PostWithCategory,
};
use crate::domain::layout::CardSize;
use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, PostRepository, PostRepositoryError,
};
use crate::domain::slug::{derive_slug, is_valid_slug};

/// Admin payload for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    /// Display name.
    pub name: String,
    /// Optional explicit slug; derived from the name when absent.
    pub slug: Option<String>,
    /// Accent palette, as submitted text.
    pub color_theme: String,
}

/// Admin payload for creating or replacing a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    /// Optional explicit slug; derived from the title when absent.
    pub slug: Option<String>,
    pub content_html: String,
    pub thumbnail_url: Option<String>,
    pub read_time: String,
    pub category_id: Uuid,
    /// Card size, as submitted text.
    pub card_size: String,
    pub is_featured: bool,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub og_image_url: Option<String>,
}

/// Aggregates shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    /// All stored posts.
    pub posts: i64,
    /// All stored categories.
    pub categories: i64,
    /// Posts flagged as featured.
    pub featured_posts: i64,
}

fn field_error(field: &str, code: &str) -> Error {
    Error::invalid_request(format!("{field}: {code}"))
        .with_details(json!({ "field": field, "code": code }))
}

fn field_value_error(field: &str, code: &str, value: &str) -> Error {
    Error::invalid_request(format!("{field}: {code} ({value})"))
        .with_details(json!({ "field": field, "code": code, "value": value }))
}

fn require_non_empty(value: &str, field: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(field_error(field, "empty"));
    }
    Ok(())
}

/// Resolve the slug for a write: an explicit slug must already be valid, an
/// absent one is derived from the display text.
fn resolve_slug(explicit: Option<&str>, derived_from: &str, field: &str) -> Result<String, Error> {
    match explicit.map(str::trim).filter(|slug| !slug.is_empty()) {
        Some(slug) => {
            if !is_valid_slug(slug) {
                return Err(field_value_error(field, "invalid_slug", slug));
            }
            Ok(slug.to_owned())
        }
        None => derive_slug(derived_from).ok_or_else(|| field_error(field, "underivable")),
    }
}

/// Serves the admin console's content writes and dashboard reads.
pub struct ContentAdminService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ContentAdminService {
    /// Create the service over its repositories.
    pub fn new(posts: Arc<dyn PostRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { posts, categories }
    }

    fn map_category_error(err: CategoryRepositoryError) -> Error {
        match err {
            CategoryRepositoryError::Connection { message } => {
                tracing::warn!(error = %message, "category repository unavailable");
                Error::service_unavailable("content store unavailable")
            }
            CategoryRepositoryError::NotFound { id } => {
                Error::not_found(format!("no category with id {id}"))
            }
            CategoryRepositoryError::DuplicateSlug { slug } => {
                Error::conflict(format!("category slug '{slug}' already exists"))
                    .with_details(json!({ "field": "category.slug", "code": "duplicate", "value": slug }))
            }
            CategoryRepositoryError::StillReferenced { id } => {
                Error::conflict(format!("category {id} is still referenced by posts"))
            }
            other => {
                tracing::error!(error = %other, "category repository failure");
                Error::internal("category write failed")
            }
        }
    }

    fn map_post_error(err: PostRepositoryError) -> Error {
        match err {
            PostRepositoryError::Connection { message } => {
                tracing::warn!(error = %message, "post repository unavailable");
                Error::service_unavailable("content store unavailable")
            }
            PostRepositoryError::NotFound { message } => {
                Error::not_found(format!("no such post: {message}"))
            }
            PostRepositoryError::DuplicateSlug { slug } => {
                Error::conflict(format!("post slug '{slug}' already exists"))
                    .with_details(json!({ "field": "post.slug", "code": "duplicate", "value": slug }))
            }
            PostRepositoryError::UnknownCategory { id } => {
                field_value_error("post.category_id", "unknown_category", &id.to_string())
            }
            other => {
                tracing::error!(error = %other, "post repository failure");
                Error::internal("post write failed")
            }
        }
    }

    fn validate_post_input(input: PostInput) -> Result<PostChanges, Error> {
        require_non_empty(&input.title, "post.title")?;
        require_non_empty(&input.content_html, "post.content_html")?;
        require_non_empty(&input.read_time, "post.read_time")?;
        let slug = resolve_slug(input.slug.as_deref(), &input.title, "post.slug")?;
        let card_size = CardSize::parse(&input.card_size)
            .ok_or_else(|| field_value_error("post.card_size", "unknown_value", &input.card_size))?;
        Ok(PostChanges {
            title: input.title,
            slug,
            content_html: input.content_html,
            thumbnail_url: input.thumbnail_url,
            read_time: input.read_time,
            category_id: input.category_id,
            card_size,
            is_featured: input.is_featured,
            seo_title: input.seo_title,
            seo_description: input.seo_description,
            og_image_url: input.og_image_url,
        })
    }

    /// Create a category, deriving its slug when none was supplied.
    pub async fn create_category(&self, input: CategoryInput) -> Result<Category, Error> {
        require_non_empty(&input.name, "category.name")?;
        let slug = resolve_slug(input.slug.as_deref(), &input.name, "category.slug")?;
        let color_theme = ColorTheme::parse(&input.color_theme).ok_or_else(|| {
            field_value_error("category.color_theme", "unknown_value", &input.color_theme)
        })?;
        self.categories
            .insert(NewCategory {
                name: input.name,
                slug,
                color_theme,
            })
            .await
            .map_err(Self::map_category_error)
    }

    /// Delete a category. Refused with a conflict while posts reference it.
    pub async fn delete_category(&self, id: Uuid) -> Result<(), Error> {
        self.categories
            .delete(id)
            .await
            .map_err(Self::map_category_error)
    }

    /// Every post for the admin table, newest created first.
    pub async fn list_posts(&self) -> Result<Vec<PostWithCategory>, Error> {
        let mut posts = self
            .posts
            .list_all()
            .await
            .map_err(Self::map_post_error)?;
        posts.sort_by_key(|entry| std::cmp::Reverse(entry.post.created_at()));
        Ok(posts)
    }

    /// Create a post, deriving its slug when none was supplied.
    pub async fn create_post(&self, input: PostInput) -> Result<PostWithCategory, Error> {
        let changes = Self::validate_post_input(input)?;
        self.posts
            .insert(NewPost {
                title: changes.title,
                slug: changes.slug,
                content_html: changes.content_html,
                thumbnail_url: changes.thumbnail_url,
                read_time: changes.read_time,
                category_id: changes.category_id,
                card_size: changes.card_size,
                is_featured: changes.is_featured,
                published_at: None,
                seo_title: changes.seo_title,
                seo_description: changes.seo_description,
                og_image_url: changes.og_image_url,
            })
            .await
            .map_err(Self::map_post_error)
    }

    /// Replace a post's content fields.
    pub async fn update_post(&self, id: Uuid, input: PostInput) -> Result<PostWithCategory, Error> {
        let changes = Self::validate_post_input(input)?;
        self.posts
            .update(id, changes)
            .await
            .map_err(Self::map_post_error)
    }

    /// Delete a post.
    pub async fn delete_post(&self, id: Uuid) -> Result<(), Error> {
        self.posts.delete(id).await.map_err(Self::map_post_error)
    }

    /// Dashboard aggregates.
    pub async fn stats(&self) -> Result<DashboardStats, Error> {
        let counts = self.posts.counts().await.map_err(Self::map_post_error)?;
        let categories = self
            .categories
            .list()
            .await
            .map_err(Self::map_category_error)?;
        Ok(DashboardStats {
            posts: counts.total,
            categories: i64::try_from(categories.len()).unwrap_or(i64::MAX),
            featured_posts: counts.featured,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::FixtureContentRepository;
    use rstest::rstest;

    fn service() -> (Arc<FixtureContentRepository>, ContentAdminService) {
        let store = Arc::new(FixtureContentRepository::default());
        (store.clone(), ContentAdminService::new(store.clone(), store))
    }

    fn category_input(name: &str, slug: Option<&str>) -> CategoryInput {
        CategoryInput {
            name: name.to_owned(),
            slug: slug.map(str::to_owned),
            color_theme: "yellow".to_owned(),
        }
    }

    fn post_input(title: &str, category_id: Uuid) -> PostInput {
        PostInput {
            title: title.to_owned(),
            slug: None,
            content_html: "<p>mətn</p>".to_owned(),
            thumbnail_url: None,
            read_time: "3 dəq".to_owned(),
            category_id,
            card_size: "standard".to_owned(),
            is_featured: false,
            seo_title: None,
            seo_description: None,
            og_image_url: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn category_slug_is_derived_from_the_azerbaijani_name() {
        let (_, service) = service();
        let category = service
            .create_category(category_input("Əyləncə Sənayesi", None))
            .await
            .expect("created");
        assert_eq!(category.slug(), "eylence-senayesi");
    }

    #[rstest]
    #[tokio::test]
    async fn explicit_invalid_slug_is_rejected_with_field_details() {
        let (_, service) = service();
        let err = service
            .create_category(category_input("Texnologiya", Some("Bad Slug")))
            .await
            .expect_err("invalid slug");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details");
        assert_eq!(details.get("field").and_then(|v| v.as_str()), Some("category.slug"));
    }

    #[rstest]
    #[tokio::test]
    async fn symbol_only_name_cannot_derive_a_slug() {
        let (_, service) = service();
        let err = service
            .create_category(category_input("!!!", None))
            .await
            .expect_err("underivable");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_category_slug_maps_to_conflict() {
        let (_, service) = service();
        service
            .create_category(category_input("Texnologiya", None))
            .await
            .expect("first");
        let err = service
            .create_category(category_input("Texnologiya", None))
            .await
            .expect_err("duplicate");
        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_card_size_is_a_validation_failure() {
        let (_, service) = service();
        let category = service
            .create_category(category_input("Texnologiya", None))
            .await
            .expect("category");
        let mut input = post_input("Başlıq", category.id());
        input.card_size = "gigantic".to_owned();
        let err = service.create_post(input).await.expect_err("unknown size");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details");
        assert_eq!(details.get("value").and_then(|v| v.as_str()), Some("gigantic"));
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_a_referenced_category_is_a_conflict() {
        let (_, service) = service();
        let category = service
            .create_category(category_input("Texnologiya", None))
            .await
            .expect("category");
        service
            .create_post(post_input("Başlıq", category.id()))
            .await
            .expect("post");
        let err = service
            .delete_category(category.id())
            .await
            .expect_err("referenced");
        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[rstest]
    #[tokio::test]
    async fn stats_count_posts_categories_and_featured() {
        let (_, service) = service();
        let category = service
            .create_category(category_input("Texnologiya", None))
            .await
            .expect("category");
        let mut featured = post_input("Birinci", category.id());
        featured.is_featured = true;
        service.create_post(featured).await.expect("featured post");
        service
            .create_post(post_input("İkinci", category.id()))
            .await
            .expect("plain post");

        let stats = service.stats().await.expect("stats");
        assert_eq!(stats.posts, 2);
        assert_eq!(stats.categories, 1);
        assert_eq!(stats.featured_posts, 1);
    }
}
