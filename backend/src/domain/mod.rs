//! Domain primitives, entities, and services.
//!
//! Purpose: model the editorial content (categories, posts, settings), the
//! pure policies over it (feed composition, card layout, branding resolution,
//! SEO derivation), and the services that orchestrate them through ports.
//! Keep types immutable and document invariants and serialisation contracts
//! (serde) in each type's Rustdoc.

pub mod auth;
pub mod branding;
pub mod content;
pub mod error;
pub mod feed;
pub mod layout;
pub mod ports;
pub mod seo;
pub mod slug;

mod content_admin_service;
mod demo_seeder;
mod feed_service;
mod settings_service;
mod trace_id;

pub use self::auth::{AdminCredentials, AdminIdentity, LoginCredentials, LoginValidationError};
pub use self::content_admin_service::{
    CategoryInput, ContentAdminService, DashboardStats, PostInput,
};
pub use self::demo_seeder::{DemoContentSeeder, demo_bundle};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::feed_service::{FeedService, FeedSnapshot};
pub use self::settings_service::SettingsService;
pub use self::slug::derive_slug;
pub use self::trace_id::TraceId;
