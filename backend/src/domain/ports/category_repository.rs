//! Port for category persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::content::{Category, NewCategory};

use super::define_port_error;

define_port_error! {
    /// Errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "category repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "category repository query failed: {message}",
        /// The requested category does not exist.
        NotFound { id: Uuid } =>
            "category {id} not found",
        /// Another category already uses the requested slug.
        DuplicateSlug { slug: String } =>
            "category slug '{slug}' already exists",
        /// The category is still referenced by posts and must not be removed.
        StillReferenced { id: Uuid } =>
            "category {id} is still referenced by posts",
    }
}

/// Port for category storage.
///
/// Listing is ordered by name ascending so the navigation bar and the admin
/// console show categories alphabetically. Deletion must refuse while any
/// post references the category (the store enforces this with a restricting
/// foreign key).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, ordered by name.
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// Insert a category, returning the stored entity.
    async fn insert(&self, category: NewCategory) -> Result<Category, CategoryRepositoryError>;

    /// Delete a category by id.
    async fn delete(&self, id: Uuid) -> Result<(), CategoryRepositoryError>;
}
