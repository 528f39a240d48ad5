//! Review rating type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// No rating was picked.
    #[error("rating cannot be empty")]
    Empty,
    /// The input is not one of the picker's option values.
    #[error("rating must be one of \"1\" to \"5\", got {0:?}")]
    NotAnOption(String),
    /// The number is outside the 1-5 scale.
    #[error("rating must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// The rejected value.
        value: u8,
        /// Lowest allowed rating.
        min: u8,
        /// Highest allowed rating.
        max: u8,
    },
}

/// A review rating on a 1-5 scale.
///
/// ## Examples
///
/// ```
/// use product_page_core::Rating;
///
/// assert!(Rating::new(5).is_ok());
/// assert!(Rating::new(0).is_err());
/// assert_eq!("4".parse::<Rating>().map(Rating::value), Ok(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating a shopper can give.
    pub const MIN: u8 = 1;
    /// Highest rating a shopper can give.
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside 1-5.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if `value` is not in 1-5.
    pub fn new(value: u8) -> Result<Self, RatingError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RatingError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Read a rating picker's option value.
    ///
    /// The picker offers exactly `""` (nothing picked) and `"1"` to `"5"`;
    /// no other spelling is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::NotAnOption`] for any other string.
    pub fn from_option_value(value: &str) -> Result<Option<Self>, RatingError> {
        if value.is_empty() {
            return Ok(None);
        }

        Self::descending()
            .find(|rating| rating.to_string() == value)
            .map(Some)
            .ok_or_else(|| RatingError::NotAnOption(value.to_owned()))
    }

    /// Returns the rating as a number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All ratings from highest to lowest, in the order a rating picker lists them.
    pub fn descending() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).rev().map(Self)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_option_value(s)?.ok_or(RatingError::Empty)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
