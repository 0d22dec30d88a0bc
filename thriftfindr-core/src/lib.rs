//! ThriftFindr storefront core
//!
//! Platform-agnostic logic for the ThriftFindr storefront directory: record
//! normalization, the search/category/page pipeline, the pager window, the
//! exclusive modal controller and carousel affordances.
//! This crate has no browser dependencies; the web client supplies a
//! [`StoreApi`] and a [`ScrollLock`].

pub mod api;
pub mod carousel;
pub mod catalog;
pub mod category;
pub mod config;
pub mod constants;
pub mod error;
pub mod forms;
pub mod load;
pub mod modal;
pub mod pagination;
pub mod records;
pub mod try_on;

// Re-export commonly used types
pub use api::{
    StoreApi, StoreDetail, decode_items, decode_stores, find_store, load_item_feed,
    load_store_detail, load_store_listing, store_items_url, stores_url,
};
pub use carousel::{ScrollAffordance, ScrollDirection, ScrollMetrics, scroll_target};
pub use catalog::{
    BrowseState, CatalogPage, EmptyReason, Searchable, filter_visible, matches_category,
    matches_search, page_slice, total_pages,
};
pub use category::{CategoryFilter, CategoryPill, ColorTag};
pub use config::{ConfigError, StorefrontConfig};
pub use error::CatalogError;
pub use forms::{
    FieldErrors, FormError, FormField, NewItemDraft, NewItemSubmission, StoreRegistration,
    StoreRegistrationDraft,
};
pub use load::{LoadState, PageLifetime};
pub use modal::{
    ItemDetailView, ModalAction, ModalController, ModalState, ScrollLock, ScrollLockGuard,
};
pub use pagination::{PageMarker, PageMarkers, PagerState, page_markers};
pub use records::{
    ApiItem, ApiStore, ItemRecord, RecordRejection, StoreRecord, format_price_cents,
    normalize_items, normalize_stores, parse_tags,
};
pub use try_on::{TryOnItem, TryOnView};
