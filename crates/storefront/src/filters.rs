//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use product_page_core::Rating;

/// Renders a 1-5 rating as filled and empty stars.
///
/// Usage in templates: `{{ review.rating|stars }}` renders `4` as `★★★★☆`.
#[askama::filter_fn]
pub fn stars(rating: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let max = usize::from(Rating::MAX);
    let filled = rating
        .to_string()
        .parse::<usize>()
        .map_or(0, |value| value.min(max));
    Ok(format!("{}{}", "★".repeat(filled), "☆".repeat(max - filled)))
}

/// Inline style for a color swatch.
///
/// Usage in templates: `{{ swatch.color|swatch_style }}`
#[askama::filter_fn]
pub fn swatch_style(color: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("background-color: {color};"))
}
