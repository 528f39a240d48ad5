//! Product Page Core - Domain types for the product page.
//!
//! This crate provides the types shared by the storefront components and the
//! integration tests:
//! - [`Variant`] and [`Product`] - what is on display
//! - [`Review`], [`Rating`] and [`ReviewList`] - what shoppers say about it
//! - [`Price`], [`Shipping`] and [`StockStatus`] - derived display values
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no rendering, no event
//! plumbing. Components live in `product-page-storefront`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
