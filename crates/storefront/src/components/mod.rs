//! Page components.
//!
//! The component tree mirrors the rendered page:
//!
//! ```text
//! ProductPage (crate::page)
//! └── ProductDisplay
//!     └── ProductTabs
//!         └── ReviewForm
//! ```
//!
//! Parents pass data down as method arguments; children report back by
//! returning events, except the review form, which publishes on the
//! [`crate::events::PageChannel`].

pub mod product_display;
pub mod product_tabs;
pub mod review_form;

pub use product_display::ProductDisplay;
pub use product_tabs::{ProductTabs, Tab, TabsEvent};
pub use review_form::{MissingField, ReviewForm, SubmitOutcome};
