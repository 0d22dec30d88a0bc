use futures::executor::block_on;
use thriftfindr_core::{CategoryFilter, ItemRecord, StoreRecord, TryOnItem};
use thriftfindr_web::components::{
    carousel::{Carousel, Props as CarouselProps},
    category_pills::{CategoryPills, Props as CategoryPillsProps},
    footer::{Footer, Props as FooterProps},
    item_card::{ItemCard, Props as ItemCardProps},
    item_detail_modal::{ItemDetailModal, Props as ItemDetailModalProps},
    new_item_modal::{NewItemModal, Props as NewItemModalProps},
    pagination::{Pagination, Props as PaginationProps},
    status::{Props as StatusProps, StatusKind, StatusMessage},
    store_card::StoreCard,
    store_registration_modal::{Props as StoreRegistrationProps, StoreRegistrationModal},
};
use thriftfindr_web::pages::try_on::{PanelProps, TryOnPanel};
use yew::prelude::*;
use yew::{Callback, LocalServerRenderer};
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

#[derive(Properties, PartialEq)]
struct RoutedProps {
    path: AttrValue,
    content: Html,
}

#[function_component(Routed)]
fn routed(props: &RoutedProps) -> Html {
    let history = use_memo(props.path.clone(), |path| {
        AnyHistory::from(MemoryHistory::with_entries(vec![path.to_string()]))
    });
    html! {
        <Router history={(*history).clone()}>
            { props.content.clone() }
        </Router>
    }
}

fn render_routed(path: &str, content: Html) -> String {
    block_on(
        LocalServerRenderer::<Routed>::with_props(RoutedProps {
            path: AttrValue::from(path.to_string()),
            content,
        })
        .render(),
    )
}

fn jacket() -> ItemRecord {
    let mut item = ItemRecord::new(7, "Denim Jacket", 4500, "denim, blue, outerwear");
    item.store_id = 3;
    item.original_price_cents = Some(9000);
    item.brand = Some("Levi's".to_string());
    item.description = Some("Broken-in trucker jacket".to_string());
    item
}

fn pagination_html(current_page: usize, total_pages: usize) -> String {
    block_on(
        LocalServerRenderer::<Pagination>::with_props(PaginationProps {
            current_page,
            total_pages,
            on_page_change: Callback::noop(),
            items_name: AttrValue::from("stores"),
        })
        .render(),
    )
}

#[test]
fn pagination_hidden_for_single_page() {
    assert!(!pagination_html(1, 1).contains("pager"));
    assert!(!pagination_html(1, 0).contains("pager"));
}

#[test]
fn pagination_renders_window_with_gaps() {
    let html = pagination_html(5, 10);
    assert!(html.contains("Pagination for stores"));
    assert!(html.contains("aria-current=\"page\""));
    assert_eq!(html.matches("pager__gap").count(), 1);
    for page in ["1", "3", "7", "10"] {
        assert!(html.contains(&format!(">{page}</button>")), "missing page {page}");
    }
    assert!(!html.contains(">8</button>"));

    let first = pagination_html(1, 10);
    assert_eq!(first.matches("disabled").count(), 1);
    let middle = pagination_html(5, 10);
    assert!(!middle.contains("disabled"));
}

#[test]
fn category_pills_mark_active_state() {
    let mut filter = CategoryFilter::store_detail();
    let first = filter.pills()[0].name.clone();
    filter.toggle(&first);
    let html = block_on(
        LocalServerRenderer::<CategoryPills>::with_props(CategoryPillsProps {
            pills: filter.pills().to_vec(),
            on_toggle: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("pill--active"));
    assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
    assert!(html.contains(&first));
}

#[test]
fn status_message_prefixes_errors() {
    let render = |kind, message: &str| {
        block_on(
            LocalServerRenderer::<StatusMessage>::with_props(StatusProps {
                kind,
                message: AttrValue::from(message.to_string()),
            })
            .render(),
        )
    };
    let error = render(StatusKind::Error, "HTTP error! status: 500");
    assert!(error.contains("Error: HTTP error! status: 500"));
    assert!(error.contains("role=\"alert\""));

    let empty = render(StatusKind::Empty, "No stores found.");
    assert!(empty.contains("No stores found."));
    assert!(!empty.contains("Error:"));
}

#[test]
fn footer_shows_year_and_legal_links() {
    let html = block_on(
        LocalServerRenderer::<Footer>::with_props(FooterProps {
            year: AttrValue::from("2031"),
        })
        .render(),
    );
    assert!(html.contains("2031 ThriftFindr"));
    assert!(html.contains("Privacy Policy"));
    assert!(html.contains("Terms"));
}

#[test]
fn item_card_shows_price_and_tags() {
    let html = block_on(
        LocalServerRenderer::<ItemCard>::with_props(ItemCardProps {
            item: jacket(),
            on_view: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Denim Jacket"));
    assert!(html.contains("$45.00"));
    assert!(html.contains("denim"));
    assert!(html.contains("View Item"));
}

#[test]
fn item_detail_modal_uses_fallback_labels() {
    let bare = ItemRecord::new(1, "Mystery Box", 1000, "");
    let html = block_on(
        LocalServerRenderer::<ItemDetailModal>::with_props(ItemDetailModalProps {
            item: bare,
            on_close: Callback::noop(),
            on_try_on: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("Vintage"));
    assert!(html.contains("Fashion"));
    assert!(html.contains("Style"));
    assert!(html.contains("No detailed description available."));
    assert!(html.contains("TRY ME ON"));
}

#[test]
fn item_detail_modal_shows_original_price_and_tags() {
    let html = block_on(
        LocalServerRenderer::<ItemDetailModal>::with_props(ItemDetailModalProps {
            item: jacket(),
            on_close: Callback::noop(),
            on_try_on: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("$90.00"));
    assert!(html.contains("outerwear"));
    assert!(html.contains("Broken-in trucker jacket"));
    assert!(!html.contains("Vintage"));
}

#[test]
fn form_modals_render_their_fields() {
    let new_item = block_on(
        LocalServerRenderer::<NewItemModal>::with_props(NewItemModalProps {
            on_close: Callback::noop(),
        })
        .render(),
    );
    assert!(new_item.contains("List a New Item"));
    assert!(new_item.contains("Item Name"));
    assert!(new_item.contains("Submit Item"));

    let registration = block_on(
        LocalServerRenderer::<StoreRegistrationModal>::with_props(StoreRegistrationProps {
            on_close: Callback::noop(),
        })
        .render(),
    );
    assert!(registration.contains("Register Your Store"));
}

#[test]
fn carousel_starts_with_right_arrow_only() {
    let mut second = jacket();
    second.id = 8;
    second.name = "Wool Scarf".to_string();
    let html = block_on(
        LocalServerRenderer::<Carousel>::with_props(CarouselProps {
            title: AttrValue::from("Freshly Found"),
            items: vec![jacket(), second],
        })
        .render(),
    );
    assert!(html.contains("Freshly Found"));
    assert!(html.contains("Scroll right"));
    assert!(!html.contains("Scroll left"));
    assert!(html.contains("Store ID: 3"));
    assert!(html.contains("Wool Scarf"));
}

#[test]
fn store_card_links_to_detail_route() {
    let store = StoreRecord {
        id: 12,
        name: "Second Act".to_string(),
        address: "14 Mill Lane".to_string(),
        hours: "9-5".to_string(),
        image_url: "https://picsum.photos/seed/12/400/250".to_string(),
    };
    let html = render_routed("/stores", html! { <StoreCard store={store} /> });
    assert!(html.contains("Second Act"));
    assert!(html.contains("href=\"/stores/12\""));
    assert!(html.contains("N/A - 14 Mill Lane"));
    assert!(html.contains("General"));
}

#[test]
fn try_on_panel_handles_missing_and_ready_items() {
    let render = |item: Option<TryOnItem>| {
        block_on(
            LocalServerRenderer::<TryOnPanel>::with_props(PanelProps {
                item,
                on_back: Callback::noop(),
            })
            .render(),
        )
    };
    let missing = render(None);
    assert!(missing.contains("No Item Selected for AR Try-On"));
    assert!(missing.contains("Go Back"));

    let ready = render(Some(TryOnItem::from(&jacket())));
    assert!(ready.contains("Try On: Denim Jacket"));
    assert!(ready.contains(thriftfindr_core::constants::AR_PREVIEW_IMAGE_URL));
    assert!(ready.contains("$45.00"));
}
