//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format for display (e.g., "$2.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency code. The page only sells in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    /// Symbol shown in front of an amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }
}

/// Shipping cost shown next to the product.
///
/// Premium members ship for free; everyone else pays the flat
/// [`Shipping::STANDARD_RATE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shipping {
    Free,
    Flat(Price),
}

impl Shipping {
    /// Flat rate charged to non-premium shoppers: $2.99.
    pub const STANDARD_RATE: Price =
        Price::new(Decimal::from_parts(299, 0, 0, false, 2), CurrencyCode::USD);

    /// Shipping for a shopper with the given membership.
    #[must_use]
    pub const fn for_membership(premium: bool) -> Self {
        if premium {
            Self::Free
        } else {
            Self::Flat(Self::STANDARD_RATE)
        }
    }
}

impl fmt::Display for Shipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("Free"),
            Self::Flat(price) => write!(f, "{price}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display_pads_to_cents() {
        let price = Price::new(Decimal::new(5, 0), CurrencyCode::USD);
        assert_eq!(price.display(), "$5.00");

        let price = Price::new(Decimal::new(1050, 2), CurrencyCode::USD);
        assert_eq!(price.to_string(), "$10.50");
    }

    #[test]
    fn test_shipping_is_free_for_premium() {
        assert_eq!(Shipping::for_membership(true), Shipping::Free);
        assert_eq!(Shipping::for_membership(true).to_string(), "Free");
    }

    #[test]
    fn test_shipping_charges_standard_rate() {
        let shipping = Shipping::for_membership(false);
        assert_eq!(shipping, Shipping::Flat(Shipping::STANDARD_RATE));
        assert_eq!(shipping.to_string(), "$2.99");
    }
}
