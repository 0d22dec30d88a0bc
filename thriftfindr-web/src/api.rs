//! Browser implementation of the storefront API.
use serde::de::DeserializeOwned;
use thiserror::Error;
use thriftfindr_core::{
    ApiItem, ApiStore, CatalogError, StoreApi, StorefrontConfig, store_items_url, stores_url,
};
use wasm_bindgen_futures::JsFuture;

use crate::dom::{fetch_response, js_error_message};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("JSON parsing error: {0}")]
    Decode(String),
}

impl From<WebApiError> for CatalogError {
    fn from(err: WebApiError) -> Self {
        match err {
            WebApiError::Network(message) => Self::Transport(message),
            WebApiError::Status(status) => Self::Http { status },
            WebApiError::Decode(message) => Self::Malformed(message),
        }
    }
}

/// Reads stores and items with `window.fetch`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WebStoreApi {
    api_base: String,
}

impl WebStoreApi {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    #[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WebApiError> {
        let response = fetch_response(url)
            .await
            .map_err(|err| WebApiError::Network(js_error_message(&err)))?;
        if !response.ok() {
            return Err(WebApiError::Status(response.status()));
        }
        let body = response
            .json()
            .map_err(|err| WebApiError::Decode(js_error_message(&err)))?;
        let value = JsFuture::from(body)
            .await
            .map_err(|err| WebApiError::Decode(js_error_message(&err)))?;
        serde_wasm_bindgen::from_value(value).map_err(|err| WebApiError::Decode(err.to_string()))
    }
}

impl StoreApi for WebStoreApi {
    type Error = WebApiError;

    async fn fetch_stores(&self) -> Result<Vec<ApiStore>, Self::Error> {
        self.get_json(&stores_url(&self.api_base)).await
    }

    async fn fetch_store_items(&self, store_id: u64) -> Result<Vec<ApiItem>, Self::Error> {
        self.get_json(&store_items_url(&self.api_base, store_id))
            .await
    }
}
