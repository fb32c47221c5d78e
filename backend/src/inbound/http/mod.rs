//! HTTP inbound adapter exposing REST endpoints.

pub mod admin;
pub mod assets;
pub mod auth;
pub mod cache_control;
pub mod categories;
pub mod error;
pub mod feed;
pub mod health;
pub mod posts;
pub mod session;
pub mod settings;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
