use std::cell::RefCell;

use futures::executor::block_on;
use thriftfindr_core::{
    ApiItem, ApiStore, CatalogError, LoadState, PageLifetime, StoreApi, load_item_feed,
    load_store_detail, load_store_listing,
};

#[derive(Default)]
struct MemoryApi {
    stores: Vec<ApiStore>,
    items: Vec<ApiItem>,
    store_status: Option<u16>,
    calls: RefCell<Vec<String>>,
}

impl StoreApi for MemoryApi {
    type Error = CatalogError;

    async fn fetch_stores(&self) -> Result<Vec<ApiStore>, Self::Error> {
        self.calls.borrow_mut().push("stores".into());
        match self.store_status {
            Some(status) => Err(CatalogError::Http { status }),
            None => Ok(self.stores.clone()),
        }
    }

    async fn fetch_store_items(&self, store_id: u64) -> Result<Vec<ApiItem>, Self::Error> {
        self.calls.borrow_mut().push(format!("items:{store_id}"));
        Ok(self
            .items
            .iter()
            .filter(|item| item.store_id == Some(store_id))
            .cloned()
            .collect())
    }
}

fn store(id: u64, name: &str) -> ApiStore {
    ApiStore {
        id,
        name: name.to_string(),
        address: Some(format!("{id} Market St")),
        hours: Some("10-6".to_string()),
        image_url: None,
    }
}

fn item(id: u64, store_id: u64, name: &str, price: f64) -> ApiItem {
    ApiItem {
        id,
        store_id: Some(store_id),
        name: name.to_string(),
        brand: None,
        price,
        original_price: Some(price * 2.0),
        tags: Some("vintage, clothing".to_string()),
        image_url: None,
        description: None,
    }
}

fn fixture() -> MemoryApi {
    MemoryApi {
        stores: vec![store(1, "Attic Finds"), store(2, "Second Spin")],
        items: vec![
            item(10, 1, "Denim Jacket", 29.99),
            item(11, 1, "", 5.0),
            item(12, 2, "Record Crate", 15.0),
            item(13, 1, "Wool Coat", 60.0),
        ],
        ..MemoryApi::default()
    }
}

#[test]
fn detail_load_finds_store_then_items() {
    let api = fixture();
    let detail = block_on(load_store_detail(&api, 1)).unwrap();
    assert_eq!(detail.store.name, "Attic Finds");
    assert_eq!(detail.store.image_url, "https://picsum.photos/seed/1/400/250");
    let names: Vec<&str> = detail.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Denim Jacket", "Wool Coat"]);
    assert_eq!(detail.items[0].display_price(), "$29.99");
    assert_eq!(detail.items[0].display_original_price().as_deref(), Some("$59.98"));
    assert_eq!(detail.featured(4).len(), 2);
    assert_eq!(*api.calls.borrow(), vec!["stores", "items:1"]);
}

#[test]
fn unknown_store_skips_item_request() {
    let api = fixture();
    let err = block_on(load_store_detail(&api, 99)).unwrap_err();
    assert_eq!(err, CatalogError::StoreNotFound { store_id: 99 });
    assert_eq!(err.user_message(), "Store not found.");
    assert_eq!(*api.calls.borrow(), vec!["stores"]);
}

#[test]
fn failed_store_request_becomes_page_message() {
    let api = MemoryApi {
        store_status: Some(500),
        ..fixture()
    };
    let state = LoadState::from_result(block_on(load_store_listing(&api)));
    assert_eq!(state.error(), Some("HTTP error! status: 500"));
}

#[test]
fn home_feed_is_truncated() {
    let api = fixture();
    let feed = block_on(load_item_feed(&api, 1, 1)).unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].id, 10);
}

#[test]
fn results_after_teardown_are_discarded() {
    let api = fixture();
    let lifetime = PageLifetime::begin();
    let mut page: LoadState<usize> = LoadState::Loading;
    let result = block_on(load_store_listing(&api));
    lifetime.end();
    let delivered = lifetime.deliver(result, |result| {
        page = LoadState::from_result(result.map(|stores| stores.len()));
    });
    assert!(!delivered);
    assert!(page.is_loading());
}
