//! Stock status derived from a variant's quantity.

use serde::{Deserialize, Serialize};

/// Whether the selected variant can be added to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// Stock status for a quantity on hand.
    #[must_use]
    pub const fn from_quantity(quantity: u32) -> Self {
        if quantity > 0 {
            Self::InStock
        } else {
            Self::OutOfStock
        }
    }

    /// Returns `true` for [`StockStatus::InStock`].
    #[must_use]
    pub const fn is_in_stock(self) -> bool {
        matches!(self, Self::InStock)
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InStock => write!(f, "In Stock"),
            Self::OutOfStock => write!(f, "Out of Stock"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_from_quantity() {
        assert_eq!(StockStatus::from_quantity(10), StockStatus::InStock);
        assert_eq!(StockStatus::from_quantity(1), StockStatus::InStock);
        assert_eq!(StockStatus::from_quantity(0), StockStatus::OutOfStock);
    }

    #[test]
    fn test_stock_status_labels() {
        assert_eq!(StockStatus::InStock.to_string(), "In Stock");
        assert_eq!(StockStatus::OutOfStock.to_string(), "Out of Stock");
        assert!(!StockStatus::OutOfStock.is_in_stock());
    }
}
