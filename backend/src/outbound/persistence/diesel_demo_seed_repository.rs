//! PostgreSQL-backed demo content seeding adapter.
//!
//! The whole bundle lands in one transaction. If any bundle post slug is
//! already stored the run reports `AlreadySeeded` and writes nothing, so
//! repeated seeding (container restarts, double-clicked admin buttons) is
//! harmless.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{
    DemoSeedBundle, DemoSeedOutcome, DemoSeedRepository, DemoSeedRepositoryError, SeedApplication,
};

use super::diesel_error_mapping::{map_content_diesel_error, map_content_pool_error};
use super::models::{NewCategoryRow, NewPostRow};
use super::pool::{DbPool, PoolError};
use super::schema::{categories, posts};

/// Diesel-backed implementation of the demo seeding port.
#[derive(Clone)]
pub struct DieselDemoSeedRepository {
    pool: DbPool,
}

impl DieselDemoSeedRepository {
    /// Create a new seeding repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DemoSeedRepositoryError {
    map_content_pool_error(error, DemoSeedRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> DemoSeedRepositoryError {
    map_content_diesel_error(
        error,
        DemoSeedRepositoryError::query,
        DemoSeedRepositoryError::connection,
    )
}

/// Bundles must be self-contained: every post links a category shipped in
/// the same bundle. Catching a bad bundle here keeps the transaction free of
/// mid-flight surprises.
fn check_bundle_links(bundle: &DemoSeedBundle) -> Result<(), DemoSeedRepositoryError> {
    for post in &bundle.posts {
        if !bundle
            .categories
            .iter()
            .any(|category| category.slug == post.category_slug)
        {
            return Err(DemoSeedRepositoryError::query(format!(
                "bundle post '{}' references category slug '{}' not present in the bundle",
                post.slug, post.category_slug
            )));
        }
    }
    Ok(())
}

fn to_count(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

#[async_trait]
impl DemoSeedRepository for DieselDemoSeedRepository {
    async fn apply(
        &self,
        bundle: DemoSeedBundle,
    ) -> Result<DemoSeedOutcome, DemoSeedRepositoryError> {
        check_bundle_links(&bundle)?;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let outcome = conn
            .transaction(|conn| {
                async move {
                    let bundle_post_slugs: Vec<&str> =
                        bundle.posts.iter().map(|post| post.slug.as_str()).collect();

                    let already_present: i64 = posts::table
                        .filter(posts::slug.eq_any(&bundle_post_slugs))
                        .count()
                        .get_result(conn)
                        .await?;

                    if already_present > 0 {
                        let stored_categories: i64 =
                            categories::table.count().get_result(conn).await?;
                        let stored_posts: i64 = posts::table.count().get_result(conn).await?;
                        return Ok(DemoSeedOutcome {
                            result: SeedApplication::AlreadySeeded,
                            categories: to_count(stored_categories),
                            posts: to_count(stored_posts),
                        });
                    }

                    // A category slug may already exist from earlier manual
                    // work; reuse the stored row rather than failing.
                    for category in &bundle.categories {
                        diesel::insert_into(categories::table)
                            .values(&NewCategoryRow {
                                name: &category.name,
                                slug: &category.slug,
                                color_theme: category.color_theme.as_str(),
                            })
                            .on_conflict(categories::slug)
                            .do_nothing()
                            .execute(conn)
                            .await?;
                    }

                    let bundle_category_slugs: Vec<&str> = bundle
                        .categories
                        .iter()
                        .map(|category| category.slug.as_str())
                        .collect();
                    let id_rows: Vec<(String, Uuid)> = categories::table
                        .filter(categories::slug.eq_any(&bundle_category_slugs))
                        .select((categories::slug, categories::id))
                        .load(conn)
                        .await?;
                    let category_ids: HashMap<String, Uuid> = id_rows.into_iter().collect();

                    for post in &bundle.posts {
                        let category_id = category_ids
                            .get(&post.category_slug)
                            .copied()
                            .ok_or(diesel::result::Error::NotFound)?;

                        diesel::insert_into(posts::table)
                            .values(&NewPostRow {
                                title: &post.title,
                                slug: &post.slug,
                                content_html: &post.content_html,
                                thumbnail_url: post.thumbnail_url.as_deref(),
                                read_time: &post.read_time,
                                category_id,
                                card_size: post.card_size.as_str(),
                                is_featured: post.is_featured,
                                published_at: Some(post.published_at),
                                seo_title: None,
                                seo_description: None,
                                og_image_url: None,
                            })
                            .execute(conn)
                            .await?;
                    }

                    let stored_categories: i64 =
                        categories::table.count().get_result(conn).await?;
                    let stored_posts: i64 = posts::table.count().get_result(conn).await?;

                    Ok(DemoSeedOutcome {
                        result: SeedApplication::Applied,
                        categories: to_count(stored_categories),
                        posts: to_count(stored_posts),
                    })
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(outcome)
    }
}
