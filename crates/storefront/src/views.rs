//! Template views: component state flattened into what the templates print.
//!
//! Views are rebuilt from the components on every render, so the HTML always
//! reflects the current derived state.

use std::path::Path;

use askama::Template;
use product_page_core::{Rating, Review};

use crate::components::{ProductDisplay, ProductTabs, ReviewForm, Tab};
use crate::error::Result;
use crate::filters;
use crate::page::ProductPage;

/// One color swatch.
#[derive(Debug, Clone)]
pub struct SwatchView {
    pub index: usize,
    pub color: String,
    pub selected: bool,
}

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductDisplayView {
    pub title: String,
    pub image_url: String,
    pub alt_text: String,
    pub on_sale: bool,
    pub in_stock: bool,
    pub stock_label: String,
    pub shipping: String,
    pub swatches: Vec<SwatchView>,
}

impl ProductDisplayView {
    /// Build the view for `display`, resolving images against `assets_dir`.
    #[must_use]
    pub fn new(display: &ProductDisplay, premium: bool, assets_dir: &Path) -> Self {
        let product = display.product();
        let selected = display.selected_index();

        Self {
            title: display.title(),
            image_url: asset_url(assets_dir, display.image()),
            alt_text: product.alt_text.clone(),
            on_sale: product.on_sale,
            in_stock: display.in_stock(),
            stock_label: display.stock().to_string(),
            shipping: ProductDisplay::shipping(premium).to_string(),
            swatches: product
                .variants()
                .iter()
                .enumerate()
                .map(|(index, variant)| SwatchView {
                    index,
                    color: variant.color.clone(),
                    selected: index == selected,
                })
                .collect(),
        }
    }
}

/// A tab header.
#[derive(Debug, Clone)]
pub struct TabView {
    pub label: &'static str,
    pub selected: bool,
}

/// A review line.
#[derive(Debug, Clone)]
pub struct ReviewView {
    pub name: String,
    pub text: String,
    pub rating: u8,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            name: review.name.clone(),
            text: review.text.clone(),
            rating: review.rating.value(),
        }
    }
}

/// An `<option>` in a rating picker.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Options for a rating picker with a leading blank entry labelled `blank_label`.
fn rating_options(blank_label: &str, current: Option<Rating>) -> Vec<OptionView> {
    std::iter::once(OptionView {
        value: String::new(),
        label: blank_label.to_string(),
        selected: current.is_none(),
    })
    .chain(Rating::descending().map(|rating| OptionView {
        value: rating.to_string(),
        label: rating.to_string(),
        selected: current == Some(rating),
    }))
    .collect()
}

/// Review form data for templates.
#[derive(Debug, Clone)]
pub struct ReviewFormView {
    pub name: String,
    pub text: String,
    pub errors: Vec<&'static str>,
    pub rating_options: Vec<OptionView>,
}

impl From<&ReviewForm> for ReviewFormView {
    fn from(form: &ReviewForm) -> Self {
        Self {
            name: form.name().to_string(),
            text: form.text().to_string(),
            errors: form.errors().iter().map(|field| field.message()).collect(),
            rating_options: rating_options("", form.rating()),
        }
    }
}

/// Tabs panel data for templates.
#[derive(Debug, Clone)]
pub struct TabsView {
    pub tabs: Vec<TabView>,
    pub show_reviews: bool,
    pub show_form: bool,
    pub show_shipping: bool,
    pub show_details: bool,
    pub reviews: Vec<ReviewView>,
    pub filter_options: Vec<OptionView>,
    pub shipping: String,
    pub details: Vec<String>,
    pub form: ReviewFormView,
}

impl TabsView {
    /// Build the view from the tabs and the inputs their parent passes down.
    #[must_use]
    pub fn new(tabs: &ProductTabs, display: &ProductDisplay, premium: bool) -> Self {
        let selected = tabs.selected_tab();

        Self {
            tabs: Tab::ALL
                .into_iter()
                .map(|tab| TabView {
                    label: tab.label(),
                    selected: tab == selected,
                })
                .collect(),
            show_reviews: selected == Tab::Reviews,
            show_form: selected == Tab::MakeAReview,
            show_shipping: selected == Tab::Shipping,
            show_details: selected == Tab::Details,
            reviews: tabs
                .filtered_reviews(display.reviews())
                .into_iter()
                .map(ReviewView::from)
                .collect(),
            filter_options: rating_options("All", tabs.rating_filter()),
            shipping: ProductDisplay::shipping(premium).to_string(),
            details: display.product().details.clone(),
            form: ReviewFormView::from(tabs.form()),
        }
    }
}

/// Full product page template.
#[derive(Template)]
#[template(path = "product_page.html")]
pub struct ProductPageTemplate {
    pub cart_count: usize,
    pub product: ProductDisplayView,
    pub tabs: TabsView,
}

impl ProductPageTemplate {
    /// Build the template from the page's current state.
    #[must_use]
    pub fn from_page(page: &ProductPage, assets_dir: &Path) -> Self {
        let display = page.display();

        Self {
            cart_count: page.cart().len(),
            product: ProductDisplayView::new(display, page.premium(), assets_dir),
            tabs: TabsView::new(display.tabs(), display, page.premium()),
        }
    }
}

/// Render `page` to HTML.
///
/// # Errors
///
/// Returns `PageError::Render` if a template fails to render.
pub fn render_page(page: &ProductPage, assets_dir: &Path) -> Result<String> {
    let html = ProductPageTemplate::from_page(page, assets_dir).render()?;
    tracing::debug!(bytes = html.len(), "page rendered");
    Ok(html)
}

/// Resolve an image path against the assets directory.
fn asset_url(assets_dir: &Path, image: &str) -> String {
    assets_dir
        .join(image.trim_start_matches("./"))
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use product_page_core::ReviewList;

    use super::*;
    use crate::catalog;
    use crate::page::PageAction;

    fn page() -> ProductPage {
        ProductPage::new(catalog::socks(), ReviewList::new(), true)
    }

    fn render(page: &ProductPage) -> String {
        page.render(Path::new("assets")).unwrap()
    }

    #[test]
    fn test_asset_url_joins_directory() {
        assert_eq!(
            asset_url(Path::new("assets"), "socks.jpg"),
            "assets/socks.jpg"
        );
        assert_eq!(
            asset_url(Path::new("static"), "./socks.jpg"),
            "static/socks.jpg"
        );
    }

    #[test]
    fn test_rating_options_mark_current() {
        let options = rating_options("All", Some(Rating::new(4).unwrap()));
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["", "5", "4", "3", "2", "1"]);

        let selected: Vec<&str> = options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["4"]);
    }

    #[test]
    fn test_render_in_stock_page() {
        let html = render(&page());

        assert!(html.contains("Vue Mastery Socks"));
        assert!(html.contains("assets/vmSocks-green-onWhite.jpg"));
        assert!(html.contains("In Stock"));
        assert!(html.contains("Shipping: Free"));
        assert!(html.contains("On Sale!"));
        assert!(html.contains("Cart(0)"));
        assert!(!html.contains("disabled-button"));
    }

    #[test]
    fn test_render_out_of_stock_disables_button() {
        let mut page = page();
        page.apply(PageAction::SelectVariant { index: 1 }).unwrap();

        let html = render(&page);
        assert!(html.contains("assets/vmSocks-blue-onWhite.jpg"));
        assert!(html.contains("Out of Stock"));
        assert!(html.contains("disabled-button"));
    }

    #[test]
    fn test_render_cart_count() {
        let mut page = page();
        page.apply(PageAction::AddToCart).unwrap();
        page.apply(PageAction::AddToCart).unwrap();

        assert!(render(&page).contains("Cart(2)"));
    }

    #[test]
    fn test_render_form_errors() {
        let mut page = page();
        page.apply(PageAction::SelectTab {
            tab: Tab::MakeAReview,
        })
        .unwrap();
        page.apply(PageAction::SetName { name: "Ada".into() }).unwrap();
        page.apply(PageAction::SubmitReview).unwrap();

        let html = render(&page);
        assert!(html.contains("Please correct the following error(s):"));
        assert!(html.contains("Review required."));
        assert!(html.contains("Rating required."));
        assert!(!html.contains("Name required."));
        assert!(html.contains("value=\"Ada\""));
    }

    #[test]
    fn test_render_reviews_tab() {
        let mut page = page();
        page.add_review(Review::new("Ada", "Warm and soft", Rating::new(4).unwrap()));

        let html = render(&page);
        assert!(html.contains("Ada"));
        assert!(html.contains("Warm and soft"));
        assert!(html.contains("★★★★☆"));
    }

    #[test]
    fn test_render_empty_reviews_message() {
        assert!(render(&page()).contains("There are no reviews yet."));
    }

    #[test]
    fn test_render_details_tab() {
        let mut page = page();
        page.apply(PageAction::SelectTab { tab: Tab::Details })
            .unwrap();

        let html = render(&page);
        assert!(html.contains("80% cotton"));
        assert!(html.contains("Gender-neutral"));
    }

    #[test]
    fn test_render_shipping_tab_without_premium() {
        let mut page = page();
        page.set_premium(false);
        page.apply(PageAction::SelectTab { tab: Tab::Shipping })
            .unwrap();

        assert!(render(&page).contains("$2.99"));
    }
}
