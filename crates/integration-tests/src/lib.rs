//! Integration tests for the product page.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p product-page-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `page_session` - Full sessions driven through `ProductPage::apply`
//! - `script_replay` - Catalog and action-script files as the binary loads them
//!
//! This library holds the fixtures shared by the test files.

use product_page_core::{Product, Rating, Review, ReviewList, Variant, VariantId};
use product_page_storefront::{PageAction, ProductPage, catalog};

/// Green socks, in stock.
pub const GREEN: VariantId = VariantId::new(2234);
/// Blue socks, sold out.
pub const BLUE: VariantId = VariantId::new(2235);

/// A fresh page showing the built-in socks.
#[must_use]
pub fn socks_page(premium: bool) -> ProductPage {
    ProductPage::new(catalog::socks(), ReviewList::new(), premium)
}

/// A product with three variants, the middle one sold out.
#[must_use]
pub fn rainbow_product() -> Product {
    Product::with_variants(
        "Scarf",
        "Knit Co",
        Variant::new(VariantId::new(1), "red", "scarf-red.jpg", 4),
        [
            Variant::new(VariantId::new(2), "yellow", "scarf-yellow.jpg", 0),
            Variant::new(VariantId::new(3), "purple", "scarf-purple.jpg", 1),
        ],
    )
}

/// Build a review; panics on an invalid rating, which is a test bug.
#[must_use]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
pub fn review(name: &str, text: &str, rating: u8) -> Review {
    Review::new(name, text, Rating::new(rating).unwrap())
}

/// The actions a shopper performs to fill in and submit the review form.
#[must_use]
pub fn fill_and_submit(name: &str, text: &str, rating: &str) -> Vec<PageAction> {
    vec![
        PageAction::SetName {
            name: name.to_string(),
        },
        PageAction::SetReviewText {
            text: text.to_string(),
        },
        PageAction::SetRating {
            rating: rating.to_string(),
        },
        PageAction::SubmitReview,
    ]
}
