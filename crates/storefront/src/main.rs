//! Product Page - renders a product page session to HTML.
//!
//! # Usage
//!
//! ```bash
//! PRODUCT_PAGE_SCRIPT=session.json PRODUCT_PAGE_OUTPUT=page.html product-page
//! ```
//!
//! The binary loads the catalog, replays the optional action script against
//! a fresh page session, and writes the rendered page. See
//! [`product_page_storefront::config`] for every variable.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use product_page_storefront::{Catalog, PageConfig, PageError, ProductPage, Result, catalog};

fn main() -> ExitCode {
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "product_page_storefront=info,product_page=info".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "product page render failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = PageConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    let mut page = ProductPage::new(catalog.product, catalog.reviews, config.premium);

    if let Some(script) = &config.script_path {
        for action in catalog::load_script(script)? {
            page.apply(action)?;
        }
    }

    let html = page.render(&config.assets_dir)?;
    std::fs::write(&config.output_path, html).map_err(|source| PageError::Io {
        path: config.output_path.clone(),
        source,
    })?;

    tracing::info!(
        output = %config.output_path.display(),
        cart = page.cart().len(),
        reviews = page.reviews().len(),
        premium = page.premium(),
        "product page rendered"
    );
    Ok(())
}
