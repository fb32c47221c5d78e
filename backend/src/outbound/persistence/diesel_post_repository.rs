//! PostgreSQL-backed post storage adapter.
//!
//! Every read joins the owning category so callers get display-ready
//! [`PostWithCategory`] values in one round trip. Listings order by
//! `published_at` descending with `created_at` as the tie-breaker, matching
//! the feed contract.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::content::{ContentValidationError, NewPost, PostChanges, PostWithCategory};
use crate::domain::ports::{PostCounts, PostQuery, PostRepository, PostRepositoryError};

use super::diesel_error_mapping::{map_content_diesel_error, map_content_pool_error};
use super::models::{CategoryRow, NewPostRow, PostChangesRow, PostRow};
use super::pool::{DbPool, PoolError};
use super::schema::{categories, posts};

/// Diesel-backed implementation of the post storage port.
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PostRepositoryError {
    map_content_pool_error(error, PostRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> PostRepositoryError {
    map_content_diesel_error(
        error,
        PostRepositoryError::query,
        PostRepositoryError::connection,
    )
}

/// Writes can trip two constraints: the slug's unique index and the
/// category foreign key.
fn map_write_error(
    error: diesel::result::Error,
    slug: &str,
    category_id: Uuid,
) -> PostRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            PostRepositoryError::duplicate_slug(slug)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            PostRepositoryError::unknown_category(category_id)
        }
        _ => map_diesel_error(error),
    }
}

fn map_validation_error(error: ContentValidationError) -> PostRepositoryError {
    PostRepositoryError::query(error.to_string())
}

fn rows_to_entity(post: PostRow, category: CategoryRow) -> Result<PostWithCategory, PostRepositoryError> {
    let category = category.into_entity().map_err(map_validation_error)?;
    let post = post.into_entity().map_err(map_validation_error)?;
    Ok(PostWithCategory {
        post,
        category: Some(category),
    })
}

impl DieselPostRepository {
    /// Fetch the owning category for a freshly written post row and pair
    /// them up.
    async fn attach_category(
        &self,
        conn: &mut diesel_async::pooled_connection::bb8::PooledConnection<
            '_,
            diesel_async::AsyncPgConnection,
        >,
        post: PostRow,
    ) -> Result<PostWithCategory, PostRepositoryError> {
        let category: CategoryRow = categories::table
            .find(post.category_id)
            .select(CategoryRow::as_select())
            .first(conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_entity(post, category)
    }
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn list(&self, query: &PostQuery) -> Result<Vec<PostWithCategory>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut statement = posts::table
            .inner_join(categories::table)
            .select((PostRow::as_select(), CategoryRow::as_select()))
            .order((posts::published_at.desc(), posts::created_at.desc()))
            .into_boxed();

        if let Some(category_slug) = &query.category_slug {
            statement = statement.filter(categories::slug.eq(category_slug));
        }
        if let Some(search) = &query.search {
            statement = statement.filter(posts::title.ilike(format!("%{search}%")));
        }

        let rows: Vec<(PostRow, CategoryRow)> = statement
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|(post, category)| rows_to_entity(post, category))
            .collect()
    }

    async fn list_all(&self) -> Result<Vec<PostWithCategory>, PostRepositoryError> {
        self.list(&PostQuery::default()).await
    }

    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<PostWithCategory>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(PostRow, CategoryRow)> = posts::table
            .inner_join(categories::table)
            .filter(posts::slug.eq(slug))
            .select((PostRow::as_select(), CategoryRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(|(post, category)| rows_to_entity(post, category))
            .transpose()
    }

    async fn insert(&self, post: NewPost) -> Result<PostWithCategory, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewPostRow {
            title: &post.title,
            slug: &post.slug,
            content_html: &post.content_html,
            thumbnail_url: post.thumbnail_url.as_deref(),
            read_time: &post.read_time,
            category_id: post.category_id,
            card_size: post.card_size.as_str(),
            is_featured: post.is_featured,
            published_at: post.published_at,
            seo_title: post.seo_title.as_deref(),
            seo_description: post.seo_description.as_deref(),
            og_image_url: post.og_image_url.as_deref(),
        };

        let stored: PostRow = diesel::insert_into(posts::table)
            .values(&new_row)
            .returning(PostRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|error| map_write_error(error, &post.slug, post.category_id))?;

        self.attach_category(&mut conn, stored).await
    }

    async fn update(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<PostWithCategory, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes_row = PostChangesRow {
            title: &changes.title,
            slug: &changes.slug,
            content_html: &changes.content_html,
            thumbnail_url: changes.thumbnail_url.as_deref(),
            read_time: &changes.read_time,
            category_id: changes.category_id,
            card_size: changes.card_size.as_str(),
            is_featured: changes.is_featured,
            seo_title: changes.seo_title.as_deref(),
            seo_description: changes.seo_description.as_deref(),
            og_image_url: changes.og_image_url.as_deref(),
            updated_at: Utc::now(),
        };

        let stored: PostRow = diesel::update(posts::table.find(id))
            .set(&changes_row)
            .returning(PostRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|error| match error {
                diesel::result::Error::NotFound => {
                    PostRepositoryError::not_found(format!("post {id} does not exist"))
                }
                other => map_write_error(other, &changes.slug, changes.category_id),
            })?;

        self.attach_category(&mut conn, stored).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(posts::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(PostRepositoryError::not_found(format!(
                "post {id} does not exist"
            )));
        }
        Ok(())
    }

    async fn counts(&self) -> Result<PostCounts, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = posts::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let featured: i64 = posts::table
            .filter(posts::is_featured.eq(true))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(PostCounts { total, featured })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for post repository error mapping.
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new("constraint violated".to_owned()))
    }

    #[rstest]
    fn unique_violation_maps_to_duplicate_slug() {
        let error = map_write_error(
            database_error(DatabaseErrorKind::UniqueViolation),
            "nike-kampaniyasi",
            Uuid::new_v4(),
        );
        assert_eq!(
            error,
            PostRepositoryError::duplicate_slug("nike-kampaniyasi")
        );
    }

    #[rstest]
    fn foreign_key_violation_maps_to_unknown_category() {
        let id = Uuid::new_v4();
        let error = map_write_error(
            database_error(DatabaseErrorKind::ForeignKeyViolation),
            "nike-kampaniyasi",
            id,
        );
        assert_eq!(error, PostRepositoryError::unknown_category(id));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let error = map_diesel_error(database_error(DatabaseErrorKind::ClosedConnection));
        assert!(matches!(error, PostRepositoryError::Connection { .. }));
    }
}
