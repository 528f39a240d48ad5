//! Product catalog: the built-in socks, or one loaded from a JSON file.
//!
//! # File format
//!
//! ```json
//! {
//!   "product": {
//!     "name": "Socks",
//!     "brand": "Vue Mastery",
//!     "alt_text": "A pair of socks",
//!     "on_sale": true,
//!     "details": ["80% cotton", "20% polyester", "Gender-neutral"],
//!     "variants": [
//!       {"id": 2234, "color": "green", "image": "vmSocks-green-onWhite.jpg", "quantity": 10}
//!     ]
//!   },
//!   "reviews": [{"name": "Ada", "text": "Warm", "rating": 5}]
//! }
//! ```
//!
//! The camelCase spellings are accepted too: `product` for `name`,
//! `altText`, `onSale`, and `variantId`, `variantColor`, `variantImage`,
//! `variantQuantity` on variants.

use std::path::Path;

use product_page_core::{Product, ReviewList, Variant, VariantId};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{PageError, Result};
use crate::page::PageAction;

/// A product together with the reviews it starts with.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub product: Product,
    #[serde(default)]
    pub reviews: ReviewList,
}

impl Catalog {
    /// The built-in socks with no reviews.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            product: socks(),
            reviews: ReviewList::new(),
        }
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Io` if the file cannot be read and
    /// `PageError::Json` if it is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog: Self = read_json(path)?;
        tracing::info!(
            path = %path.display(),
            product = %catalog.product.title(),
            variants = catalog.product.variants().len(),
            reviews = catalog.reviews.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

/// "Vue Mastery Socks" in green (10 in stock) and blue (sold out).
#[must_use]
pub fn socks() -> Product {
    Product::with_variants(
        "Socks",
        "Vue Mastery",
        Variant::new(VariantId::new(2234), "green", "vmSocks-green-onWhite.jpg", 10),
        [Variant::new(VariantId::new(2235), "blue", "vmSocks-blue-onWhite.jpg", 0)],
    )
    .with_details(["80% cotton", "20% polyester", "Gender-neutral"])
    .with_alt_text("A pair of socks")
    .with_on_sale(true)
}

/// Load a JSON array of page actions.
///
/// # Errors
///
/// Returns `PageError::Io` if the file cannot be read and
/// `PageError::Json` if it is not an array of actions.
pub fn load_script(path: &Path) -> Result<Vec<PageAction>> {
    let actions: Vec<PageAction> = read_json(path)?;
    tracing::info!(path = %path.display(), actions = actions.len(), "script loaded");
    Ok(actions)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| PageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| PageError::Json {
        path: path.to_path_buf(),
        source,
    })
}
