//! Tabbed panel below the product: reviews, review form, shipping, details.

use std::fmt;
use std::str::FromStr;

use product_page_core::{Rating, Review, ReviewList};
use serde::{Deserialize, Serialize};

use crate::components::review_form::ReviewForm;
use crate::error::{PageError, Result};
use crate::events::{Endpoint, PageChannel, PageEvent, Topic};

/// The tabs of the panel, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Reviews,
    MakeAReview,
    Shipping,
    Details,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Self; 4] = [Self::Reviews, Self::MakeAReview, Self::Shipping, Self::Details];

    /// Label shown on the tab.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
            Self::MakeAReview => "Make a Review",
            Self::Shipping => "Shipping",
            Self::Details => "Details",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PageError::InvalidTab(s.to_string()))
    }
}

/// Events the tabs report to their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabsEvent {
    /// A review should be appended to the parent's list.
    ReviewAdded(Review),
}

/// Tab selection, rating filter and the nested review form.
///
/// The review list itself belongs to the parent; the tabs read it when
/// filtering and ask the parent to append through [`TabsEvent`].
#[derive(Debug, Clone, Default)]
pub struct ProductTabs {
    selected: Tab,
    rating_filter: Option<Rating>,
    form: ReviewForm,
}

impl ProductTabs {
    /// Create the panel with the Reviews tab selected and no filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening for submitted reviews.
    pub fn mount(channel: &mut PageChannel) {
        channel.subscribe(Topic::ReviewSubmitted, Endpoint::ProductTabs);
    }

    #[must_use]
    pub const fn selected_tab(&self) -> Tab {
        self.selected
    }

    pub fn select_tab(&mut self, tab: Tab) {
        tracing::debug!(%tab, "tab selected");
        self.selected = tab;
    }

    #[must_use]
    pub const fn rating_filter(&self) -> Option<Rating> {
        self.rating_filter
    }

    /// The filter as the picker value: `""` for all, else `"1"`..`"5"`.
    #[must_use]
    pub fn rating_filter_value(&self) -> String {
        self.rating_filter
            .map(|rating| rating.to_string())
            .unwrap_or_default()
    }

    /// Set the rating filter from the picker value.
    ///
    /// # Errors
    ///
    /// Returns `PageError::InvalidRatingFilter` unless `value` is `""` or
    /// `"1"`..`"5"`; the filter is unchanged in that case.
    pub fn set_rating_filter(&mut self, value: &str) -> Result<()> {
        self.rating_filter = Rating::from_option_value(value)
            .map_err(|_| PageError::InvalidRatingFilter(value.to_string()))?;
        tracing::debug!(filter = %self.rating_filter_value(), "review filter changed");
        Ok(())
    }

    /// Reviews passing the current filter, in their original order.
    #[must_use]
    pub fn filtered_reviews<'a>(&self, reviews: &'a ReviewList) -> Vec<&'a Review> {
        match self.rating_filter {
            None => reviews.iter().collect(),
            Some(rating) => reviews.with_rating(rating).collect(),
        }
    }

    /// Direct entry point for appending a review.
    #[must_use]
    pub const fn add_review(review: Review) -> TabsEvent {
        TabsEvent::ReviewAdded(review)
    }

    /// Handle a delivery from the page channel.
    #[must_use]
    pub fn receive(event: PageEvent) -> TabsEvent {
        match event {
            PageEvent::ReviewSubmitted(review) => Self::add_review(review),
        }
    }

    #[must_use]
    pub const fn form(&self) -> &ReviewForm {
        &self.form
    }

    pub const fn form_mut(&mut self) -> &mut ReviewForm {
        &mut self.form
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn review(name: &str, rating: u8) -> Review {
        Review::new(name, "text", Rating::new(rating).unwrap())
    }

    fn sample_reviews() -> ReviewList {
        vec![
            review("Ada", 4),
            review("Bo", 5),
            review("Cy", 4),
            review("Di", 1),
        ]
        .into_iter()
        .collect()
    }

    fn names(reviews: &[&Review]) -> Vec<String> {
        reviews.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_defaults() {
        let tabs = ProductTabs::new();
        assert_eq!(tabs.selected_tab(), Tab::Reviews);
        assert_eq!(tabs.rating_filter(), None);
        assert_eq!(tabs.rating_filter_value(), "");
    }

    #[test]
    fn test_filter_by_four_keeps_order() {
        let reviews = sample_reviews();
        let mut tabs = ProductTabs::new();
        tabs.set_rating_filter("4").unwrap();

        assert_eq!(names(&tabs.filtered_reviews(&reviews)), vec!["Ada", "Cy"]);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let reviews = sample_reviews();
        let mut tabs = ProductTabs::new();
        tabs.set_rating_filter("4").unwrap();
        tabs.set_rating_filter("").unwrap();

        assert_eq!(
            names(&tabs.filtered_reviews(&reviews)),
            vec!["Ada", "Bo", "Cy", "Di"]
        );
    }

    #[test]
    fn test_filter_with_no_matches_is_empty() {
        let reviews = sample_reviews();
        let mut tabs = ProductTabs::new();
        tabs.set_rating_filter("2").unwrap();

        assert!(tabs.filtered_reviews(&reviews).is_empty());
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let mut tabs = ProductTabs::new();
        tabs.set_rating_filter("3").unwrap();

        for value in ["0", "6", "four", " ", "04", "+4", " 4", "4 "] {
            let err = tabs.set_rating_filter(value).unwrap_err();
            assert!(matches!(err, PageError::InvalidRatingFilter(v) if v == value));
        }
        assert_eq!(tabs.rating_filter_value(), "3");
    }

    #[test]
    fn test_tab_labels_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(tab.label().parse::<Tab>().unwrap(), tab);
        }
        assert_eq!("make a review".parse::<Tab>().unwrap(), Tab::MakeAReview);
        assert!(matches!("Returns".parse::<Tab>(), Err(PageError::InvalidTab(_))));
    }

    #[test]
    fn test_receive_turns_submission_into_append() {
        let submitted = review("Ada", 5);

        let event = ProductTabs::receive(PageEvent::ReviewSubmitted(submitted.clone()));
        assert_eq!(event, TabsEvent::ReviewAdded(submitted));
    }

    #[test]
    fn test_mount_subscribes_to_submissions() {
        let mut channel = PageChannel::new();
        ProductTabs::mount(&mut channel);
        assert_eq!(channel.subscriber_count(&Topic::ReviewSubmitted), 1);
    }
}
