//! Review submission form.

use std::fmt;

use product_page_core::{Rating, Review};

use crate::error::Result;
use crate::events::{PageChannel, PageEvent, Topic};

/// A required form field that was left empty.
///
/// Variants are declared in the order their messages are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MissingField {
    Name,
    Review,
    Rating,
}

impl MissingField {
    /// Message shown above the form.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Name => "Name required.",
            Self::Review => "Review required.",
            Self::Rating => "Rating required.",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What happened when the form was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The review was published and the form cleared.
    Submitted,
    /// At least one field was missing; see [`ReviewForm::errors`].
    Incomplete,
}

/// Local state of the review form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    name: String,
    text: String,
    rating: Option<Rating>,
    errors: Vec<MissingField>,
}

impl ReviewForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub const fn set_rating(&mut self, rating: Option<Rating>) {
        self.rating = rating;
    }

    /// Set the rating from the picker's raw value; `""` clears it.
    ///
    /// # Errors
    ///
    /// Returns `PageError::InvalidRating` for anything other than `""` or
    /// `"1"`..`"5"`. The current rating is kept in that case.
    pub fn set_rating_input(&mut self, value: &str) -> Result<()> {
        self.rating = Rating::from_option_value(value)?;
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Problems found by the last submit attempt, in display order.
    #[must_use]
    pub fn errors(&self) -> &[MissingField] {
        &self.errors
    }

    /// Validate and, if complete, publish the review.
    ///
    /// Errors from the previous attempt are cleared first. A complete form
    /// publishes [`PageEvent::ReviewSubmitted`] and resets every field; an
    /// incomplete one records one [`MissingField`] per empty field and keeps
    /// what the shopper typed.
    pub fn submit(&mut self, channel: &mut PageChannel) -> SubmitOutcome {
        self.errors.clear();

        let name_present = !self.name.trim().is_empty();
        let text_present = !self.text.trim().is_empty();

        match (name_present, text_present, self.rating) {
            (true, true, Some(rating)) => {
                let review = Review::new(
                    std::mem::take(&mut self.name),
                    std::mem::take(&mut self.text),
                    rating,
                );
                self.rating = None;

                let handlers = channel.publish(
                    Topic::ReviewSubmitted,
                    PageEvent::ReviewSubmitted(review),
                );
                tracing::info!(%rating, handlers, "review submitted");
                SubmitOutcome::Submitted
            }
            (name_present, text_present, rating) => {
                if !name_present {
                    self.errors.push(MissingField::Name);
                }
                if !text_present {
                    self.errors.push(MissingField::Review);
                }
                if rating.is_none() {
                    self.errors.push(MissingField::Rating);
                }
                tracing::debug!(missing = ?self.errors, "review form incomplete");
                SubmitOutcome::Incomplete
            }
        }
    }
}
