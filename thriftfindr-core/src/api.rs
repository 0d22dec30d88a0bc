//! REST paths, payload decoding and the page load sequences.
use crate::constants::STORES_ENDPOINT;
use crate::error::CatalogError;
use crate::records::{
    ApiItem, ApiStore, ItemRecord, StoreRecord, normalize_items, normalize_store,
    normalize_stores,
};

#[must_use]
pub fn stores_url(api_base: &str) -> String {
    format!("{}{STORES_ENDPOINT}", api_base.trim_end_matches('/'))
}

#[must_use]
pub fn store_items_url(api_base: &str, store_id: u64) -> String {
    format!("{}/{store_id}/items", stores_url(api_base))
}

/// Decode the body of `GET /api/stores`.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] when the body is not a store array or an
/// entry lacks `id` or `name`.
pub fn decode_stores(body: &str) -> Result<Vec<ApiStore>, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode the body of `GET /api/stores/{id}/items`.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] when the body is not an item array or an
/// entry lacks `id`, `name` or `price`.
pub fn decode_items(body: &str) -> Result<Vec<ApiItem>, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

/// The two read endpoints the storefront needs.
/// Browser and in-memory implementations provide this.
#[allow(async_fn_in_trait)]
pub trait StoreApi {
    type Error: Into<CatalogError>;

    /// # Errors
    ///
    /// Returns an error on a non-success status, transport failure or
    /// undecodable body.
    async fn fetch_stores(&self) -> Result<Vec<ApiStore>, Self::Error>;

    /// # Errors
    ///
    /// Returns an error on a non-success status, transport failure or
    /// undecodable body.
    async fn fetch_store_items(&self, store_id: u64) -> Result<Vec<ApiItem>, Self::Error>;
}

/// A store and its normalized inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDetail {
    pub store: StoreRecord,
    pub items: Vec<ItemRecord>,
}

impl StoreDetail {
    /// Leading items for the featured strip.
    #[must_use]
    pub fn featured(&self, count: usize) -> &[ItemRecord] {
        &self.items[..count.min(self.items.len())]
    }
}

/// Pick `store_id` out of the store list.
///
/// # Errors
///
/// Returns [`CatalogError::StoreNotFound`] when the id is absent or the entry
/// was rejected during normalization.
pub fn find_store(stores: Vec<ApiStore>, store_id: u64) -> Result<StoreRecord, CatalogError> {
    stores
        .into_iter()
        .find(|store| store.id == store_id)
        .ok_or(CatalogError::StoreNotFound { store_id })
        .and_then(|store| {
            normalize_store(store).map_err(|err| {
                log::warn!("Store {store_id} is unusable: {err}");
                CatalogError::StoreNotFound { store_id }
            })
        })
}

/// Load the store listing.
///
/// # Errors
///
/// Propagates the API failure as a [`CatalogError`].
pub async fn load_store_listing<A: StoreApi>(api: &A) -> Result<Vec<StoreRecord>, CatalogError> {
    let stores = api.fetch_stores().await.map_err(Into::into)?;
    Ok(normalize_stores(stores))
}

/// Load a store detail page: fetch stores, find the id, fetch its items.
///
/// # Errors
///
/// Returns [`CatalogError::StoreNotFound`] for an unknown id, otherwise the
/// failing request's error. Items are not requested for an unknown store.
pub async fn load_store_detail<A: StoreApi>(
    api: &A,
    store_id: u64,
) -> Result<StoreDetail, CatalogError> {
    let stores = api.fetch_stores().await.map_err(Into::into)?;
    let store = find_store(stores, store_id)?;
    let items = api.fetch_store_items(store_id).await.map_err(Into::into)?;
    Ok(StoreDetail {
        store,
        items: normalize_items(items),
    })
}

/// Load the first `limit` items of a store for the home carousel.
///
/// # Errors
///
/// Propagates the API failure as a [`CatalogError`].
pub async fn load_item_feed<A: StoreApi>(
    api: &A,
    store_id: u64,
    limit: usize,
) -> Result<Vec<ItemRecord>, CatalogError> {
    let items = api.fetch_store_items(store_id).await.map_err(Into::into)?;
    let mut items = normalize_items(items);
    items.truncate(limit);
    Ok(items)
}
