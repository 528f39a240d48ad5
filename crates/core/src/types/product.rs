//! Products and their purchasable variants.

use serde::{Deserialize, Serialize};

use crate::types::id::VariantId;
use crate::types::status::StockStatus;

/// Errors that can occur when building a [`Product`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// A product must offer at least one variant to select.
    #[error("product {0:?} has no variants")]
    NoVariants(String),
}

/// One purchasable configuration of a product, such as a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(alias = "variantId")]
    pub id: VariantId,
    #[serde(alias = "variantColor")]
    pub color: String,
    /// Image path relative to the assets directory.
    #[serde(alias = "variantImage")]
    pub image: String,
    /// Units on hand.
    #[serde(alias = "variantQuantity")]
    pub quantity: u32,
}

impl Variant {
    /// Create a variant.
    #[must_use]
    pub fn new(
        id: VariantId,
        color: impl Into<String>,
        image: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            color: color.into(),
            image: image.into(),
            quantity,
        }
    }

    /// Stock status derived from the quantity on hand.
    #[must_use]
    pub const fn stock(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }
}

/// A product on display.
///
/// Always has at least one variant, so index 0 is a valid default selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    pub name: String,
    pub brand: String,
    /// Free-form bullet points ("80% cotton", ...).
    pub details: Vec<String>,
    variants: Vec<Variant>,
    pub alt_text: String,
    pub on_sale: bool,
}

/// Unvalidated product as it appears in a catalog file.
#[derive(Deserialize)]
struct RawProduct {
    #[serde(alias = "product")]
    name: String,
    brand: String,
    #[serde(default)]
    details: Vec<String>,
    variants: Vec<Variant>,
    #[serde(default, alias = "altText")]
    alt_text: String,
    #[serde(default, alias = "onSale")]
    on_sale: bool,
}

impl TryFrom<RawProduct> for Product {
    type Error = ProductError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let mut product = Self::new(raw.name, raw.brand, raw.variants)?;
        product.details = raw.details;
        product.alt_text = raw.alt_text;
        product.on_sale = raw.on_sale;
        Ok(product)
    }
}

impl Product {
    /// Create a product with no details, no alt text and not on sale.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NoVariants`] if `variants` is empty.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        variants: Vec<Variant>,
    ) -> Result<Self, ProductError> {
        let mut variants = variants.into_iter();
        let Some(first) = variants.next() else {
            return Err(ProductError::NoVariants(name.into()));
        };

        Ok(Self::with_variants(name, brand, first, variants))
    }

    /// Create a product from a first variant plus any number of others.
    ///
    /// Infallible counterpart of [`Product::new`].
    #[must_use]
    pub fn with_variants(
        name: impl Into<String>,
        brand: impl Into<String>,
        first: Variant,
        others: impl IntoIterator<Item = Variant>,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            details: Vec::new(),
            variants: std::iter::once(first).chain(others).collect(),
            alt_text: String::new(),
            on_sale: false,
        }
    }

    /// Set the detail bullet points.
    #[must_use]
    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details = details.into_iter().map(Into::into).collect();
        self
    }

    /// Set the image alt text.
    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = alt_text.into();
        self
    }

    /// Mark the product as on sale.
    #[must_use]
    pub const fn with_on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = on_sale;
        self
    }

    /// `"<brand> <name>"`, e.g. "Vue Mastery Socks".
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    /// All variants in display order. Never empty.
    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// The variant at `index`, if any.
    #[must_use]
    pub fn variant(&self, index: usize) -> Option<&Variant> {
        self.variants.get(index)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn socks() -> Product {
        Product::new(
            "Socks",
            "Vue Mastery",
            vec![
                Variant::new(VariantId::new(2234), "green", "vmSocks-green-onWhite.jpg", 10),
                Variant::new(VariantId::new(2235), "blue", "vmSocks-blue-onWhite.jpg", 0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_product_requires_variants() {
        let err = Product::new("Socks", "Vue Mastery", Vec::new()).unwrap_err();
        assert_eq!(err, ProductError::NoVariants("Socks".to_string()));
    }

    #[test]
    fn test_title_joins_brand_and_name() {
        assert_eq!(socks().title(), "Vue Mastery Socks");
    }

    #[test]
    fn test_variant_lookup() {
        let product = socks();
        assert_eq!(product.variant(1).unwrap().color, "blue");
        assert!(product.variant(2).is_none());
    }

    #[test]
    fn test_variant_stock() {
        let product = socks();
        assert!(product.variant(0).unwrap().stock().is_in_stock());
        assert!(!product.variant(1).unwrap().stock().is_in_stock());
    }

    #[test]
    fn test_product_deserializes_original_field_names() {
        let json = r#"{
            "product": "Socks",
            "brand": "Vue Mastery",
            "altText": "A pair of socks",
            "onSale": true,
            "details": ["80% cotton"],
            "variants": [
                {"variantId": 2234, "variantColor": "green",
                 "variantImage": "vmSocks-green-onWhite.jpg", "variantQuantity": 10}
            ]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.alt_text, "A pair of socks");
        assert!(product.on_sale);
        assert_eq!(product.variants().len(), 1);
    }

    #[test]
    fn test_product_deserialize_rejects_empty_variants() {
        let json = r#"{"name": "Socks", "brand": "Vue Mastery", "variants": []}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
