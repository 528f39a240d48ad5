//! Page root: owns the cart, the premium flag, the event channel and the
//! component tree, and turns user input into component calls.

use std::path::Path;

use product_page_core::{Product, Review, ReviewList, Shipping, VariantId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cart::Cart;
use crate::components::{ProductDisplay, ProductTabs, SubmitOutcome, Tab};
use crate::error::Result;
use crate::events::{Delivery, Endpoint, PageChannel};
use crate::views;

/// A single user input on the page.
///
/// Scripts replayed by the `product-page` binary are JSON arrays of these,
/// e.g. `[{"action": "select_variant", "index": 1}, {"action": "add_to_cart"}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PageAction {
    /// Hover or click a color swatch.
    SelectVariant { index: usize },
    /// Click "Add to cart".
    AddToCart,
    /// Remove one entry for a variant from the cart.
    RemoveFromCart { variant_id: VariantId },
    /// Click a tab.
    SelectTab { tab: Tab },
    /// Pick a value in the review filter (`""` or `"1"`..`"5"`).
    FilterReviews { rating: String },
    /// Type in the name field.
    SetName { name: String },
    /// Type in the review field.
    SetReviewText { text: String },
    /// Pick a value in the rating field (`""` or `"1"`..`"5"`).
    SetRating { rating: String },
    /// Submit the review form.
    SubmitReview,
}

/// Everything on the page for one session.
#[derive(Debug)]
pub struct ProductPage {
    premium: bool,
    cart: Cart,
    channel: PageChannel,
    display: ProductDisplay,
}

impl ProductPage {
    /// Build the component tree and mount the tabs on a fresh channel.
    #[must_use]
    pub fn new(product: Product, reviews: ReviewList, premium: bool) -> Self {
        let mut channel = PageChannel::new();
        let display = ProductDisplay::new(product, reviews);
        ProductTabs::mount(&mut channel);

        Self {
            premium,
            cart: Cart::new(),
            channel,
            display,
        }
    }

    /// Apply one user input, then deliver anything it published.
    ///
    /// # Errors
    ///
    /// Returns an error for inputs the rendered page cannot produce: an
    /// out-of-range swatch index or a picker value outside its options. The
    /// page is unchanged in that case.
    #[instrument(level = "debug", skip(self))]
    pub fn apply(&mut self, action: PageAction) -> Result<()> {
        match action {
            PageAction::SelectVariant { index } => self.display.select_variant(index)?,
            PageAction::AddToCart => {
                self.add_to_cart();
            }
            PageAction::RemoveFromCart { variant_id } => {
                self.remove_from_cart(variant_id);
            }
            PageAction::SelectTab { tab } => self.display.tabs_mut().select_tab(tab),
            PageAction::FilterReviews { rating } => {
                self.display.tabs_mut().set_rating_filter(&rating)?;
            }
            PageAction::SetName { name } => self.display.tabs_mut().form_mut().set_name(name),
            PageAction::SetReviewText { text } => {
                self.display.tabs_mut().form_mut().set_text(text);
            }
            PageAction::SetRating { rating } => {
                self.display.tabs_mut().form_mut().set_rating_input(&rating)?;
            }
            PageAction::SubmitReview => {
                self.submit_review();
            }
        }

        self.dispatch();
        Ok(())
    }

    /// Add the selected variant to the cart if it is in stock.
    ///
    /// Returns `true` if an entry was added.
    pub fn add_to_cart(&mut self) -> bool {
        match self.display.add_to_cart() {
            Some(id) => {
                self.cart.add(id);
                true
            }
            None => false,
        }
    }

    /// Remove the first cart entry for `id`, if any.
    pub fn remove_from_cart(&mut self, id: VariantId) -> bool {
        self.cart.remove(id)
    }

    /// Submit the review form and deliver the resulting review.
    pub fn submit_review(&mut self) -> SubmitOutcome {
        let outcome = self
            .display
            .tabs_mut()
            .form_mut()
            .submit(&mut self.channel);
        self.dispatch();
        outcome
    }

    /// Append a review without going through the form or the channel.
    pub fn add_review(&mut self, review: Review) {
        let event = ProductTabs::add_review(review);
        self.display.handle_tabs_event(event);
    }

    /// Route every pending channel delivery to its component.
    fn dispatch(&mut self) {
        while let Some(Delivery { handler, payload }) = self.channel.next_delivery() {
            match handler {
                Endpoint::ProductTabs => {
                    let event = ProductTabs::receive(payload);
                    self.display.handle_tabs_event(event);
                }
            }
        }
    }

    #[must_use]
    pub const fn premium(&self) -> bool {
        self.premium
    }

    pub fn set_premium(&mut self, premium: bool) {
        tracing::debug!(premium, "membership changed");
        self.premium = premium;
    }

    /// Shipping cost shown for the current membership.
    #[must_use]
    pub const fn shipping(&self) -> Shipping {
        ProductDisplay::shipping(self.premium)
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn display(&self) -> &ProductDisplay {
        &self.display
    }

    #[must_use]
    pub const fn reviews(&self) -> &ReviewList {
        self.display.reviews()
    }

    #[must_use]
    pub const fn channel(&self) -> &PageChannel {
        &self.channel
    }

    /// Render the whole page as HTML.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Render` if a template fails to render.
    pub fn render(&self, assets_dir: &Path) -> Result<String> {
        views::render_page(self, assets_dir)
    }
}
