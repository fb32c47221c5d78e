//! Port for post persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::content::{NewPost, PostChanges, PostWithCategory};

use super::define_port_error;

define_port_error! {
    /// Errors raised by post repository adapters.
    pub enum PostRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "post repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "post repository query failed: {message}",
        /// The requested post does not exist.
        NotFound { message: String } =>
            "post not found: {message}",
        /// Another post already uses the requested slug.
        DuplicateSlug { slug: String } =>
            "post slug '{slug}' already exists",
        /// The referenced category does not exist.
        UnknownCategory { id: Uuid } =>
            "category {id} does not exist",
    }
}

/// Read filter for post listings.
///
/// Both filters are conjunctive. `category_slug` matches the owning
/// category's slug exactly; `search` matches case-insensitively against the
/// post title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// Restrict to posts whose category has this slug.
    pub category_slug: Option<String>,
    /// Case-insensitive title substring.
    pub search: Option<String>,
}

/// Aggregate counts for the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostCounts {
    /// All stored posts.
    pub total: i64,
    /// Posts flagged as featured.
    pub featured: i64,
}

/// Port for post storage.
///
/// All listings return posts joined with their owning category, newest
/// `published_at` first, with ties broken by `created_at` descending so the
/// feed order is deterministic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Posts matching the query, newest first.
    async fn list(&self, query: &PostQuery) -> Result<Vec<PostWithCategory>, PostRepositoryError>;

    /// Every stored post, newest first. Used by the admin console and by
    /// feed composition, which needs the unfiltered total alongside a
    /// filtered page.
    async fn list_all(&self) -> Result<Vec<PostWithCategory>, PostRepositoryError>;

    /// Look up a single post by slug.
    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<PostWithCategory>, PostRepositoryError>;

    /// Insert a post, returning the stored entity joined with its category.
    async fn insert(&self, post: NewPost) -> Result<PostWithCategory, PostRepositoryError>;

    /// Replace a post's content fields.
    async fn update(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<PostWithCategory, PostRepositoryError>;

    /// Delete a post by id.
    async fn delete(&self, id: Uuid) -> Result<(), PostRepositoryError>;

    /// Total and featured post counts.
    async fn counts(&self) -> Result<PostCounts, PostRepositoryError>;
}
