//! Unified error handling for the product page.
//!
//! Provides a single `PageError` type returned by every fallible page
//! operation. Incomplete review submissions are *not* errors here: the form
//! keeps those as user-visible messages (see `components::review_form`).

use std::path::PathBuf;

use product_page_core::{ProductError, RatingError};
use thiserror::Error;

use crate::config::ConfigError;

/// Application-level error type for the product page.
#[derive(Debug, Error)]
pub enum PageError {
    /// A swatch index that does not exist was selected.
    #[error("Variant index {index} out of range (product has {count} variants)")]
    VariantOutOfRange { index: usize, count: usize },

    /// The rating picker sent a value outside the 1-5 scale.
    #[error("Invalid rating: {0}")]
    InvalidRating(#[from] RatingError),

    /// The review filter sent a value outside {"", "1".."5"}.
    #[error("Invalid rating filter: {0:?}")]
    InvalidRatingFilter(String),

    /// An unknown tab label.
    #[error("Unknown tab: {0:?}")]
    InvalidTab(String),

    /// The product itself is malformed.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// A catalog or script file could not be decoded.
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `PageError`.
pub type Result<T> = std::result::Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_error_display() {
        let err = PageError::VariantOutOfRange { index: 3, count: 2 };
        assert_eq!(
            err.to_string(),
            "Variant index 3 out of range (product has 2 variants)"
        );

        let err = PageError::InvalidRatingFilter("7".to_string());
        assert_eq!(err.to_string(), "Invalid rating filter: \"7\"");
    }

    #[test]
    fn test_rating_error_converts() {
        let err: PageError = RatingError::Empty.into();
        assert!(matches!(err, PageError::InvalidRating(RatingError::Empty)));
        assert_eq!(err.to_string(), "Invalid rating: rating cannot be empty");
    }
}
