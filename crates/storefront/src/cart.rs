//! Shopping cart held by the page root.
//!
//! The cart is a plain ordered list of variant ids: adding the same variant
//! twice yields two entries, and the header shows the entry count.

use product_page_core::VariantId;

/// Ordered list of variant ids added during the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<VariantId>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append one entry for `id`.
    pub fn add(&mut self, id: VariantId) {
        self.entries.push(id);
        tracing::info!(variant_id = %id, count = self.entries.len(), "added to cart");
    }

    /// Remove the first entry for `id`.
    ///
    /// Returns `false` (and changes nothing) if `id` is not in the cart.
    pub fn remove(&mut self, id: VariantId) -> bool {
        let Some(position) = self.entries.iter().position(|entry| *entry == id) else {
            tracing::debug!(variant_id = %id, "remove from cart ignored, not present");
            return false;
        };

        self.entries.remove(position);
        tracing::info!(variant_id = %id, count = self.entries.len(), "removed from cart");
        true
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been added.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were added.
    #[must_use]
    pub fn entries(&self) -> &[VariantId] {
        &self.entries
    }
}
