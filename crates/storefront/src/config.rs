//! Product page configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `PRODUCT_PAGE_PREMIUM` - Premium membership flag (default: true)
//! - `PRODUCT_PAGE_ASSETS_DIR` - Directory variant images live in (default: ./assets)
//! - `PRODUCT_PAGE_CATALOG` - JSON catalog file (default: built-in socks)
//! - `PRODUCT_PAGE_SCRIPT` - JSON array of page actions to replay before rendering
//! - `PRODUCT_PAGE_OUTPUT` - Where to write the rendered HTML (default: product.html)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Product page configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Whether the shopper is a premium member (free shipping)
    pub premium: bool,
    /// Directory that variant image paths are resolved against
    pub assets_dir: PathBuf,
    /// Catalog file to load instead of the built-in product
    pub catalog_path: Option<PathBuf>,
    /// Script of page actions to replay before rendering
    pub script_path: Option<PathBuf>,
    /// Output HTML file
    pub output_path: PathBuf,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            premium: true,
            assets_dir: PathBuf::from("./assets"),
            catalog_path: None,
            script_path: None,
            output_path: PathBuf::from("product.html"),
        }
    }
}

impl PageConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let premium = match non_empty(lookup("PRODUCT_PAGE_PREMIUM")) {
            Some(value) => parse_bool("PRODUCT_PAGE_PREMIUM", &value)?,
            None => defaults.premium,
        };

        Ok(Self {
            premium,
            assets_dir: non_empty(lookup("PRODUCT_PAGE_ASSETS_DIR"))
                .map_or(defaults.assets_dir, PathBuf::from),
            catalog_path: non_empty(lookup("PRODUCT_PAGE_CATALOG")).map(PathBuf::from),
            script_path: non_empty(lookup("PRODUCT_PAGE_SCRIPT")).map(PathBuf::from),
            output_path: non_empty(lookup("PRODUCT_PAGE_OUTPUT"))
                .map_or(defaults.output_path, PathBuf::from),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Treat blank values the same as unset ones.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a boolean flag.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}
