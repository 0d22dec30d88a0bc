//! Storefront settings loaded from the embedded `config.json`.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    CAROUSEL_ITEM_COUNT, FEATURED_ITEM_COUNT, HOME_FEED_STORE_ID, ITEM_PAGE_SIZE, STORE_PAGE_SIZE,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Prefix for API paths; empty means same origin.
    pub api_base: String,
    pub listing_page_size: usize,
    pub item_page_size: usize,
    pub featured_count: usize,
    pub carousel_count: usize,
    pub home_store_id: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            listing_page_size: STORE_PAGE_SIZE,
            item_page_size: ITEM_PAGE_SIZE,
            featured_count: FEATURED_ITEM_COUNT,
            carousel_count: CAROUSEL_ITEM_COUNT,
            home_store_id: HOME_FEED_STORE_ID,
        }
    }
}

impl StorefrontConfig {
    /// Parse a config document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON or a
    /// value has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let parsed: Self = serde_json::from_str(json)?;
        Ok(parsed.sanitized())
    }

    /// Parse `json`, falling back to defaults on any error.
    #[must_use]
    pub fn load_from_static(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            log::warn!("Falling back to default storefront config: {err}");
            Self::default()
        })
    }

    /// Replace the API base when an override is present and non-empty.
    #[must_use]
    pub fn with_api_base(mut self, api_base: Option<&str>) -> Self {
        if let Some(base) = api_base.map(str::trim).filter(|base| !base.is_empty()) {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        self
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.listing_page_size == 0 {
            self.listing_page_size = defaults.listing_page_size;
        }
        if self.item_page_size == 0 {
            self.item_page_size = defaults.item_page_size;
        }
        self.api_base = self.api_base.trim().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let cfg = StorefrontConfig::from_json(r#"{"item_page_size": 12}"#).unwrap();
        assert_eq!(cfg.item_page_size, 12);
        assert_eq!(cfg.listing_page_size, 9);
        assert_eq!(cfg.featured_count, 4);
        assert_eq!(cfg.carousel_count, 5);
        assert_eq!(cfg.home_store_id, 1);
    }

    #[test]
    fn zero_page_sizes_are_replaced() {
        let cfg =
            StorefrontConfig::from_json(r#"{"listing_page_size": 0, "item_page_size": 0}"#).unwrap();
        assert_eq!(cfg.listing_page_size, 9);
        assert_eq!(cfg.item_page_size, 8);
    }

    #[test]
    fn invalid_document_falls_back() {
        assert!(StorefrontConfig::from_json("not json").is_err());
        assert_eq!(
            StorefrontConfig::load_from_static("not json"),
            StorefrontConfig::default()
        );
    }

    #[test]
    fn api_base_override_trims_trailing_slash() {
        let cfg = StorefrontConfig::default().with_api_base(Some("https://api.example.com/"));
        assert_eq!(cfg.api_base, "https://api.example.com");
        let unchanged = cfg.clone().with_api_base(Some("  "));
        assert_eq!(unchanged, cfg);
    }
}
