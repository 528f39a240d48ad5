//! Core types for the product page.
//!
//! This module provides type-safe wrappers for the page's domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod rating;
pub mod review;
pub mod status;

pub use id::VariantId;
pub use price::{CurrencyCode, Price, Shipping};
pub use product::{Product, ProductError, Variant};
pub use rating::{Rating, RatingError};
pub use review::{Review, ReviewList};
pub use status::StockStatus;
