//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the content repository ports backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain entities. Slug resolution, validation, and feed composition live
//!   in the domain layer.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database failures are mapped to each port's
//!   error enum; constraint violations carry their domain meaning (duplicate
//!   slug, referenced category) instead of raw SQLSTATE text.

mod diesel_category_repository;
mod diesel_demo_seed_repository;
mod diesel_error_mapping;
mod diesel_post_repository;
mod diesel_site_settings_repository;
mod models;
mod pool;
mod schema;

pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_demo_seed_repository::DieselDemoSeedRepository;
pub use diesel_post_repository::DieselPostRepository;
pub use diesel_site_settings_repository::DieselSiteSettingsRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
