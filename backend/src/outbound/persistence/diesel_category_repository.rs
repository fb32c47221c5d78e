//! PostgreSQL-backed category storage adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::content::{Category, ContentValidationError, NewCategory};
use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};

use super::diesel_error_mapping::{map_content_diesel_error, map_content_pool_error};
use super::models::{CategoryRow, NewCategoryRow};
use super::pool::{DbPool, PoolError};
use super::schema::categories;

/// Diesel-backed implementation of the category storage port.
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CategoryRepositoryError {
    map_content_pool_error(error, CategoryRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CategoryRepositoryError {
    map_content_diesel_error(
        error,
        CategoryRepositoryError::query,
        CategoryRepositoryError::connection,
    )
}

/// A unique violation on insert can only be the slug index.
fn map_insert_error(error: diesel::result::Error, slug: &str) -> CategoryRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) = &error {
        return CategoryRepositoryError::duplicate_slug(slug);
    }
    map_diesel_error(error)
}

/// Posts reference categories with `ON DELETE RESTRICT`, so a foreign key
/// violation on delete means the category is still in use.
fn map_delete_error(error: diesel::result::Error, id: Uuid) -> CategoryRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) = &error {
        return CategoryRepositoryError::still_referenced(id);
    }
    map_diesel_error(error)
}

fn map_validation_error(error: ContentValidationError) -> CategoryRepositoryError {
    CategoryRepositoryError::query(error.to_string())
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CategoryRow> = categories::table
            .order(categories::name.asc())
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|row| row.into_entity().map_err(map_validation_error))
            .collect()
    }

    async fn insert(&self, category: NewCategory) -> Result<Category, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewCategoryRow {
            name: &category.name,
            slug: &category.slug,
            color_theme: category.color_theme.as_str(),
        };

        let stored: CategoryRow = diesel::insert_into(categories::table)
            .values(&new_row)
            .returning(CategoryRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|error| map_insert_error(error, &category.slug))?;

        stored.into_entity().map_err(map_validation_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(categories::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(|error| map_delete_error(error, id))?;

        if deleted == 0 {
            return Err(CategoryRepositoryError::not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for category repository error mapping.
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new("constraint violated".to_owned()))
    }

    #[rstest]
    fn unique_violation_on_insert_maps_to_duplicate_slug() {
        let error = map_insert_error(database_error(DatabaseErrorKind::UniqueViolation), "texnologiya");
        assert_eq!(
            error,
            CategoryRepositoryError::duplicate_slug("texnologiya")
        );
    }

    #[rstest]
    fn foreign_key_violation_on_delete_maps_to_still_referenced() {
        let id = Uuid::new_v4();
        let error = map_delete_error(database_error(DatabaseErrorKind::ForeignKeyViolation), id);
        assert_eq!(error, CategoryRepositoryError::still_referenced(id));
    }

    #[rstest]
    fn other_database_errors_map_to_query_errors() {
        let error = map_insert_error(database_error(DatabaseErrorKind::SerializationFailure), "x");
        assert!(matches!(error, CategoryRepositoryError::Query { .. }));
    }

    #[rstest]
    fn pool_checkout_failure_maps_to_connection_error() {
        let error = map_pool_error(PoolError::checkout("pool exhausted"));
        assert!(matches!(error, CategoryRepositoryError::Connection { .. }));
        assert!(error.to_string().contains("pool exhausted"));
    }
}
