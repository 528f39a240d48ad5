//! Product display: image, swatches, stock, shipping and the tabs panel.
//!
//! Derived values (`title`, `image`, `in_stock`, `shipping`) are recomputed
//! on every read from the product and the selected index, so they can never
//! go stale.

use product_page_core::{Product, Review, ReviewList, Shipping, StockStatus, Variant, VariantId};

use crate::components::product_tabs::{ProductTabs, TabsEvent};
use crate::error::{PageError, Result};

/// The product being shown, which variant is selected, and its reviews.
#[derive(Debug, Clone)]
pub struct ProductDisplay {
    product: Product,
    selected: usize,
    reviews: ReviewList,
    tabs: ProductTabs,
}

impl ProductDisplay {
    /// Show `product` with its first variant selected.
    #[must_use]
    pub fn new(product: Product, reviews: ReviewList) -> Self {
        Self {
            product,
            selected: 0,
            reviews,
            tabs: ProductTabs::new(),
        }
    }

    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select the variant at `index` (hovering or clicking its swatch).
    ///
    /// # Errors
    ///
    /// Returns `PageError::VariantOutOfRange` if there is no such variant.
    /// The selection is unchanged in that case.
    pub fn select_variant(&mut self, index: usize) -> Result<()> {
        let count = self.product.variants().len();
        if index >= count {
            return Err(PageError::VariantOutOfRange { index, count });
        }

        tracing::debug!(index, "variant selected");
        self.selected = index;
        Ok(())
    }

    /// The currently selected variant.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // `selected` is bounds-checked in select_variant; variants are never empty
    pub fn selected_variant(&self) -> &Variant {
        &self.product.variants()[self.selected]
    }

    /// `"<brand> <name>"`.
    #[must_use]
    pub fn title(&self) -> String {
        self.product.title()
    }

    /// Image path of the selected variant.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.selected_variant().image
    }

    #[must_use]
    pub fn stock(&self) -> StockStatus {
        self.selected_variant().stock()
    }

    /// Whether the selected variant can be added to the cart.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock().is_in_stock()
    }

    /// Shipping cost for a shopper with the given membership.
    #[must_use]
    pub const fn shipping(premium: bool) -> Shipping {
        Shipping::for_membership(premium)
    }

    /// Add the selected variant to the cart.
    ///
    /// Returns the id the parent should add, or `None` when the selected
    /// variant is out of stock (the button is disabled).
    #[must_use]
    pub fn add_to_cart(&self) -> Option<VariantId> {
        let variant = self.selected_variant();
        if !variant.stock().is_in_stock() {
            tracing::debug!(variant_id = %variant.id, "add to cart ignored, out of stock");
            return None;
        }
        Some(variant.id)
    }

    /// The canonical review list.
    #[must_use]
    pub const fn reviews(&self) -> &ReviewList {
        &self.reviews
    }

    /// Append a review to the canonical list.
    pub fn add_review(&mut self, review: Review) {
        tracing::debug!(name = %review.name, rating = %review.rating, "review added");
        self.reviews.push(review);
    }

    /// Apply an event reported by the tabs.
    pub fn handle_tabs_event(&mut self, event: TabsEvent) {
        match event {
            TabsEvent::ReviewAdded(review) => self.add_review(review),
        }
    }

    #[must_use]
    pub const fn tabs(&self) -> &ProductTabs {
        &self.tabs
    }

    pub const fn tabs_mut(&mut self) -> &mut ProductTabs {
        &mut self.tabs
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use product_page_core::Rating;

    use super::*;

    fn display() -> ProductDisplay {
        let product = Product::new(
            "Socks",
            "Vue Mastery",
            vec![
                Variant::new(VariantId::new(2234), "green", "vmSocks-green-onWhite.jpg", 10),
                Variant::new(VariantId::new(2235), "blue", "vmSocks-blue-onWhite.jpg", 0),
            ],
        )
        .unwrap();
        ProductDisplay::new(product, ReviewList::new())
    }

    #[test]
    fn test_defaults_to_first_variant() {
        let display = display();
        assert_eq!(display.selected_index(), 0);
        assert_eq!(display.title(), "Vue Mastery Socks");
        assert_eq!(display.image(), "vmSocks-green-onWhite.jpg");
        assert!(display.in_stock());
    }

    #[test]
    fn test_selection_drives_derived_state() {
        let mut display = display();
        for index in 0..display.product().variants().len() {
            display.select_variant(index).unwrap();
            let variant = display.product().variant(index).unwrap().clone();
            assert_eq!(display.image(), variant.image);
            assert_eq!(display.in_stock(), variant.quantity > 0);
        }
    }

    #[test]
    fn test_out_of_range_selection_rejected() {
        let mut display = display();
        display.select_variant(1).unwrap();

        let err = display.select_variant(2).unwrap_err();
        assert!(matches!(
            err,
            PageError::VariantOutOfRange { index: 2, count: 2 }
        ));
        assert_eq!(display.selected_index(), 1);
    }

    #[test]
    fn test_add_to_cart_gated_by_stock() {
        let mut display = display();
        assert_eq!(display.add_to_cart(), Some(VariantId::new(2234)));

        display.select_variant(1).unwrap();
        assert_eq!(display.stock(), StockStatus::OutOfStock);
        assert_eq!(display.add_to_cart(), None);
    }

    #[test]
    fn test_shipping_follows_membership() {
        assert_eq!(ProductDisplay::shipping(true).to_string(), "Free");
        assert_eq!(ProductDisplay::shipping(false).to_string(), "$2.99");
    }

    #[test]
    fn test_tabs_event_appends_review() {
        let mut display = display();
        let review = Review::new("Ada", "Cozy", Rating::new(5).unwrap());

        let event = ProductTabs::add_review(review.clone());
        display.handle_tabs_event(event);

        assert_eq!(display.reviews().len(), 1);
        assert_eq!(display.reviews().last(), Some(&review));
    }
}
