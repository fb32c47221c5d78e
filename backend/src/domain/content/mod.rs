//! Content domain types: categories, posts, and site settings.
//!
//! These types model the editorial content as validated domain entities owned
//! by the domain layer. Write payloads arrive as drafts and are validated into
//! entities; adapters convert rows to and from these types at the boundary.

use std::fmt;

mod category;
mod post;
mod site_settings;
mod validation;

#[cfg(test)]
mod tests;

pub use category::{Category, CategoryDraft, ColorTheme, NewCategory};
pub use post::{NewPost, Post, PostChanges, PostDraft, PostWithCategory};
pub use site_settings::{SettingsChanges, SiteSettings, SocialLinks};

/// Validation errors returned by content entity constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentValidationError {
    /// A slug field failed the shared slug predicate.
    InvalidSlug {
        /// Dotted path of the offending field.
        field: &'static str,
    },
    /// A required text field was empty once trimmed.
    EmptyField {
        /// Dotted path of the offending field.
        field: &'static str,
    },
    /// A colour theme value was not one of the supported palettes.
    UnknownColorTheme {
        /// Dotted path of the offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl fmt::Display for ContentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlug { field } => write!(
                f,
                "{field} must contain lowercase ASCII letters, digits, and hyphens"
            ),
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::UnknownColorTheme { field, value } => {
                write!(f, "{field} must be one of blue, pink, yellow, green (got {value})")
            }
        }
    }
}

impl std::error::Error for ContentValidationError {}
