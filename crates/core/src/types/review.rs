//! Shopper reviews and the append-only list that holds them.

use serde::{Deserialize, Serialize};

use crate::types::rating::Rating;

/// A submitted review.
///
/// Reviews are never edited once created; the form builds a fresh one for
/// every successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer's display name.
    pub name: String,
    /// Review body.
    pub text: String,
    /// Star rating.
    pub rating: Rating,
}

impl Review {
    /// Create a review.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>, rating: Rating) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            rating,
        }
    }
}

/// Ordered, append-only list of reviews.
///
/// No entry can be removed or edited once pushed; reviews accumulate for
/// the lifetime of a page session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewList(Vec<Review>);

impl ReviewList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a review at the end.
    pub fn push(&mut self, review: Review) {
        self.0.push(review);
    }

    /// Number of reviews.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nobody has reviewed the product yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reviews in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Review> {
        self.0.iter()
    }

    /// Reviews as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Review] {
        &self.0
    }

    /// The most recently appended review.
    #[must_use]
    pub fn last(&self) -> Option<&Review> {
        self.0.last()
    }

    /// Reviews with exactly `rating`, in submission order.
    pub fn with_rating(&self, rating: Rating) -> impl Iterator<Item = &Review> {
        self.0.iter().filter(move |review| review.rating == rating)
    }
}

impl FromIterator<Review> for ReviewList {
    fn from_iter<I: IntoIterator<Item = Review>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ReviewList {
    type Item = &'a Review;
    type IntoIter = std::slice::Iter<'a, Review>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
