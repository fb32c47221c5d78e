//! Curated bilingual demo content for the marketing-blog backend.
//!
//! This crate carries the fixed editorial dataset the admin console offers as
//! "load demo data": four categories and six Azerbaijani marketing case
//! studies, sized for the bento feed layout. It is deliberately independent of
//! backend domain types to avoid circular dependencies; the backend parses the
//! seed records into its own entities when applying them.
//!
//! # Example
//!
//! ```
//! use demo_content::{demo_categories, demo_posts};
//!
//! let categories = demo_categories();
//! let posts = demo_posts();
//!
//! assert_eq!(categories.len(), 4);
//! assert_eq!(posts.len(), 6);
//! assert!(posts.iter().all(|post| {
//!     categories.iter().any(|category| category.slug == post.category_slug)
//! }));
//! ```

mod records;

pub use records::{
    ColorThemeSeed, DemoCategory, DemoPost, LayoutSizeSeed, demo_categories, demo_posts,
};
