//! Read-side service behind the public feed and detail endpoints.

use std::sync::Arc;

use crate::domain::Error;
use crate::domain::content::{Category, PostWithCategory};
use crate::domain::feed::{CategoryFilter, DisplayCard, compose_feed};
use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, PostRepository, PostRepositoryError,
};

/// One fully composed home feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    /// Cards surviving the filters, in store order.
    pub cards: Vec<DisplayCard>,
    /// Posts in the store before filtering. Zero means "nothing published",
    /// which consumers render differently from "no matches".
    pub total_published: usize,
    /// All categories for the navigation bar.
    pub categories: Vec<Category>,
}

/// Serves composed feeds and post detail lookups.
pub struct FeedService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl FeedService {
    /// Create the service over its repositories.
    pub fn new(posts: Arc<dyn PostRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { posts, categories }
    }

    fn map_post_error(err: PostRepositoryError) -> Error {
        match err {
            PostRepositoryError::Connection { message } => {
                tracing::warn!(error = %message, "post repository unavailable");
                Error::service_unavailable("content store unavailable")
            }
            other => {
                tracing::error!(error = %other, "post repository failure");
                Error::internal("failed to load posts")
            }
        }
    }

    fn map_category_error(err: CategoryRepositoryError) -> Error {
        match err {
            CategoryRepositoryError::Connection { message } => {
                tracing::warn!(error = %message, "category repository unavailable");
                Error::service_unavailable("content store unavailable")
            }
            other => {
                tracing::error!(error = %other, "category repository failure");
                Error::internal("failed to load categories")
            }
        }
    }

    /// Compose the home feed for a category filter and optional search term.
    pub async fn home_feed(
        &self,
        filter: &CategoryFilter,
        search: Option<&str>,
    ) -> Result<FeedSnapshot, Error> {
        let posts = self.posts.list_all().await.map_err(Self::map_post_error)?;
        let categories = self
            .categories
            .list()
            .await
            .map_err(Self::map_category_error)?;
        let total_published = posts.len();
        Ok(FeedSnapshot {
            cards: compose_feed(&posts, filter, search),
            total_published,
            categories,
        })
    }

    /// Look up one post by slug for the detail page.
    pub async fn post_detail(&self, slug: &str) -> Result<PostWithCategory, Error> {
        self.posts
            .find_by_slug(slug)
            .await
            .map_err(Self::map_post_error)?
            .ok_or_else(|| Error::not_found(format!("no post with slug '{slug}'")))
    }

    /// All categories in navigation order.
    pub async fn categories(&self) -> Result<Vec<Category>, Error> {
        self.categories.list().await.map_err(Self::map_category_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::content::{ColorTheme, NewCategory, NewPost};
    use crate::domain::layout::CardSize;
    use crate::domain::ports::{FixtureContentRepository, MockPostRepository};
    use rstest::rstest;

    async fn seeded_service() -> FeedService {
        let store = Arc::new(FixtureContentRepository::default());
        let tech = CategoryRepository::insert(
            store.as_ref(),
            NewCategory {
                name: "Texnologiya".to_owned(),
                slug: "tech".to_owned(),
                color_theme: ColorTheme::Yellow,
            },
        )
        .await
        .expect("category");
        for (title, slug) in [("Nike kampaniyası", "nike"), ("Spotify Wrapped", "spotify")] {
            PostRepository::insert(
                store.as_ref(),
                NewPost {
                    title: title.to_owned(),
                    slug: slug.to_owned(),
                    content_html: "<p>mətn</p>".to_owned(),
                    thumbnail_url: None,
                    read_time: "3 dəq".to_owned(),
                    category_id: tech.id(),
                    card_size: CardSize::Standard,
                    is_featured: false,
                    published_at: None,
                    seo_title: None,
                    seo_description: None,
                    og_image_url: None,
                },
            )
            .await
            .expect("post");
        }
        FeedService::new(store.clone(), store)
    }

    #[rstest]
    #[tokio::test]
    async fn empty_search_result_still_reports_the_published_total() {
        let service = seeded_service().await;
        let snapshot = service
            .home_feed(&CategoryFilter::All, Some("tapılmayan"))
            .await
            .expect("feed");
        assert!(snapshot.cards.is_empty());
        assert_eq!(snapshot.total_published, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn detail_lookup_maps_absence_to_not_found() {
        let service = seeded_service().await;
        let err = service.post_detail("yoxdur").await.expect_err("absent");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn connection_failures_surface_as_service_unavailable() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_list_all()
            .returning(|| Err(PostRepositoryError::connection("pool exhausted")));
        let store = Arc::new(FixtureContentRepository::default());
        let service = FeedService::new(Arc::new(posts), store);

        let err = service
            .home_feed(&CategoryFilter::All, None)
            .await
            .expect_err("unavailable");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
