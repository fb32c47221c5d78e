//! Shared in-memory content store for tests and database-less operation.
//!
//! One state backs all three content ports so cross-entity rules hold without
//! a database: category deletion refuses while posts reference the category,
//! and seeding observes posts created through the admin surface.

use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::content::{
    Category, CategoryDraft, NewCategory, NewPost, Post, PostChanges, PostDraft, PostWithCategory,
};

use super::category_repository::{CategoryRepository, CategoryRepositoryError};
use super::demo_seed_repository::{
    DemoSeedBundle, DemoSeedOutcome, DemoSeedRepository, DemoSeedRepositoryError, SeedApplication,
};
use super::post_repository::{PostCounts, PostQuery, PostRepository, PostRepositoryError};

#[derive(Debug, Default)]
struct ContentState {
    categories: Vec<Category>,
    posts: Vec<Post>,
}

impl ContentState {
    fn category_by_id(&self, id: Uuid) -> Option<Category> {
        self.categories.iter().find(|c| c.id() == id).cloned()
    }

    fn join(&self, post: &Post) -> PostWithCategory {
        PostWithCategory {
            post: post.clone(),
            category: self.category_by_id(post.category_id()),
        }
    }

    fn insert_post(&mut self, post: NewPost) -> Result<Post, PostRepositoryError> {
        if self.posts.iter().any(|existing| existing.slug() == post.slug) {
            return Err(PostRepositoryError::duplicate_slug(post.slug));
        }
        if self.category_by_id(post.category_id).is_none() {
            return Err(PostRepositoryError::unknown_category(post.category_id));
        }
        let now = Utc::now();
        let stored = Post::new(PostDraft {
            id: Uuid::new_v4(),
            title: post.title,
            slug: post.slug,
            content_html: post.content_html,
            thumbnail_url: post.thumbnail_url,
            read_time: post.read_time,
            category_id: post.category_id,
            card_size: post.card_size,
            is_featured: post.is_featured,
            published_at: post.published_at.unwrap_or(now),
            seo_title: post.seo_title,
            seo_description: post.seo_description,
            og_image_url: post.og_image_url,
            created_at: now,
            updated_at: now,
        })
        .map_err(|err| PostRepositoryError::query(err.to_string()))?;
        self.posts.push(stored.clone());
        Ok(stored)
    }

    fn sorted_posts(&self) -> Vec<Post> {
        let mut posts = self.posts.clone();
        posts.sort_by_key(|post| Reverse((post.published_at(), post.created_at())));
        posts
    }
}

/// In-memory implementation of the content ports.
#[derive(Debug, Default)]
pub struct FixtureContentRepository {
    state: RwLock<ContentState>,
}

#[async_trait]
impl CategoryRepository for FixtureContentRepository {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut categories = self.state.read().await.categories.clone();
        categories.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(categories)
    }

    async fn insert(&self, category: NewCategory) -> Result<Category, CategoryRepositoryError> {
        let mut state = self.state.write().await;
        if state
            .categories
            .iter()
            .any(|existing| existing.slug() == category.slug)
        {
            return Err(CategoryRepositoryError::duplicate_slug(category.slug));
        }
        let stored = Category::new(CategoryDraft {
            id: Uuid::new_v4(),
            name: category.name,
            slug: category.slug,
            color_theme: category.color_theme,
            created_at: Utc::now(),
        })
        .map_err(|err| CategoryRepositoryError::query(err.to_string()))?;
        state.categories.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CategoryRepositoryError> {
        let mut state = self.state.write().await;
        if !state.categories.iter().any(|category| category.id() == id) {
            return Err(CategoryRepositoryError::not_found(id));
        }
        if state.posts.iter().any(|post| post.category_id() == id) {
            return Err(CategoryRepositoryError::still_referenced(id));
        }
        state.categories.retain(|category| category.id() != id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for FixtureContentRepository {
    async fn list(&self, query: &PostQuery) -> Result<Vec<PostWithCategory>, PostRepositoryError> {
        let state = self.state.read().await;
        let search = query.search.as_deref().map(str::to_lowercase);
        let joined = state
            .sorted_posts()
            .iter()
            .map(|post| state.join(post))
            .filter(|entry| match query.category_slug.as_deref() {
                Some(slug) => entry.category_slug() == Some(slug),
                None => true,
            })
            .filter(|entry| match search.as_deref() {
                Some(needle) => entry.post.title().to_lowercase().contains(needle),
                None => true,
            })
            .collect();
        Ok(joined)
    }

    async fn list_all(&self) -> Result<Vec<PostWithCategory>, PostRepositoryError> {
        let state = self.state.read().await;
        Ok(state.sorted_posts().iter().map(|post| state.join(post)).collect())
    }

    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<PostWithCategory>, PostRepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .posts
            .iter()
            .find(|post| post.slug() == slug)
            .map(|post| state.join(post)))
    }

    async fn insert(&self, post: NewPost) -> Result<PostWithCategory, PostRepositoryError> {
        let mut state = self.state.write().await;
        let stored = state.insert_post(post)?;
        Ok(state.join(&stored))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<PostWithCategory, PostRepositoryError> {
        let mut state = self.state.write().await;
        if state
            .posts
            .iter()
            .any(|post| post.id() != id && post.slug() == changes.slug)
        {
            return Err(PostRepositoryError::duplicate_slug(changes.slug));
        }
        if state.category_by_id(changes.category_id).is_none() {
            return Err(PostRepositoryError::unknown_category(changes.category_id));
        }
        let Some(current) = state.posts.iter().find(|post| post.id() == id).cloned() else {
            return Err(PostRepositoryError::not_found(id.to_string()));
        };
        let updated = Post::new(PostDraft {
            id,
            title: changes.title,
            slug: changes.slug,
            content_html: changes.content_html,
            thumbnail_url: changes.thumbnail_url,
            read_time: changes.read_time,
            category_id: changes.category_id,
            card_size: changes.card_size,
            is_featured: changes.is_featured,
            published_at: current.published_at(),
            seo_title: changes.seo_title,
            seo_description: changes.seo_description,
            og_image_url: changes.og_image_url,
            created_at: current.created_at(),
            updated_at: Utc::now(),
        })
        .map_err(|err| PostRepositoryError::query(err.to_string()))?;
        if let Some(slot) = state.posts.iter_mut().find(|post| post.id() == id) {
            *slot = updated.clone();
        }
        Ok(state.join(&updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), PostRepositoryError> {
        let mut state = self.state.write().await;
        let before = state.posts.len();
        state.posts.retain(|post| post.id() != id);
        if state.posts.len() == before {
            return Err(PostRepositoryError::not_found(id.to_string()));
        }
        Ok(())
    }

    async fn counts(&self) -> Result<PostCounts, PostRepositoryError> {
        let state = self.state.read().await;
        let total = i64::try_from(state.posts.len()).unwrap_or(i64::MAX);
        let featured = i64::try_from(
            state.posts.iter().filter(|post| post.is_featured()).count(),
        )
        .unwrap_or(i64::MAX);
        Ok(PostCounts { total, featured })
    }
}

#[async_trait]
impl DemoSeedRepository for FixtureContentRepository {
    async fn apply(
        &self,
        bundle: DemoSeedBundle,
    ) -> Result<DemoSeedOutcome, DemoSeedRepositoryError> {
        let mut state = self.state.write().await;

        let already_present = bundle.posts.iter().any(|seed| {
            state.posts.iter().any(|post| post.slug() == seed.slug)
        });
        if already_present {
            return Ok(DemoSeedOutcome {
                result: SeedApplication::AlreadySeeded,
                categories: state.categories.len(),
                posts: state.posts.len(),
            });
        }

        for category in bundle.categories {
            if state
                .categories
                .iter()
                .any(|existing| existing.slug() == category.slug)
            {
                continue;
            }
            let stored = Category::new(CategoryDraft {
                id: Uuid::new_v4(),
                name: category.name,
                slug: category.slug,
                color_theme: category.color_theme,
                created_at: Utc::now(),
            })
            .map_err(|err| DemoSeedRepositoryError::query(err.to_string()))?;
            state.categories.push(stored);
        }

        for seed in bundle.posts {
            let Some(category_id) = state
                .categories
                .iter()
                .find(|category| category.slug() == seed.category_slug)
                .map(Category::id)
            else {
                return Err(DemoSeedRepositoryError::query(format!(
                    "seed post '{}' references unknown category '{}'",
                    seed.slug, seed.category_slug
                )));
            };
            state
                .insert_post(NewPost {
                    title: seed.title,
                    slug: seed.slug,
                    content_html: seed.content_html,
                    thumbnail_url: seed.thumbnail_url,
                    read_time: seed.read_time,
                    category_id,
                    card_size: seed.card_size,
                    is_featured: seed.is_featured,
                    published_at: Some(seed.published_at),
                    seo_title: None,
                    seo_description: None,
                    og_image_url: None,
                })
                .map_err(|err| DemoSeedRepositoryError::query(err.to_string()))?;
        }

        Ok(DemoSeedOutcome {
            result: SeedApplication::Applied,
            categories: state.categories.len(),
            posts: state.posts.len(),
        })
    }
}
