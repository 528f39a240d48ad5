//! Product Page Storefront library.
//!
//! This crate provides the product page as a library - components, the
//! event channel that connects them, and HTML rendering - so it can be
//! tested and driven from the `product-page` binary.
//!
//! # Modules
//!
//! - [`page`] - Page root owning the cart, premium flag and channel
//! - [`components`] - Product display, tabs panel and review form
//! - [`events`] - Publish/subscribe channel between components
//! - [`views`] - Askama templates for the rendered page

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod filters;
pub mod page;
pub mod views;

pub use cart::Cart;
pub use catalog::Catalog;
pub use config::PageConfig;
pub use error::{PageError, Result};
pub use page::{PageAction, ProductPage};
