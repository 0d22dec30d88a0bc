use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::Renderer;

use thriftfindr_core::{ItemRecord, ModalAction, ModalState, ScrollLock};
use thriftfindr_web::app::App;
use thriftfindr_web::components::item_detail_modal::ItemDetailModal;
use thriftfindr_web::components::modal::use_modal_controller;
use thriftfindr_web::dom::{self, BodyScrollLock};
use yew::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
}

fn click(selector: &str) {
    let element: HtmlElement = dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("query selector")
        .unwrap_or_else(|| panic!("{selector} exists"))
        .dyn_into()
        .expect("cast to element");
    element.click();
}

fn dialog_open() -> bool {
    dom::document()
        .expect("document")
        .query_selector("[role='dialog']")
        .expect("query dialog")
        .is_some()
}

fn press_escape() {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    dom::document()
        .expect("document")
        .dispatch_event(&event)
        .expect("dispatch escape");
}

async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(20)).await;
}

#[function_component(ItemDetailHost)]
fn item_detail_host() -> Html {
    let modals = use_modal_controller();
    let open = modals.callback(|_: MouseEvent| {
        ModalAction::OpenItemDetail(ItemRecord::new(7, "Trucker Jacket", 4500, "denim,outerwear"))
    });
    let modal = match modals.state() {
        ModalState::ItemDetail(item) => html! {
            <ItemDetailModal {item} on_close={modals.close_callback()} on_try_on={Callback::noop()} />
        },
        _ => Html::default(),
    };
    html! {
        <>
            <button id="open-item" type="button" onclick={open}>{ "View" }</button>
            { modal }
        </>
    }
}

fn body_overflow() -> String {
    dom::document()
        .and_then(|doc| doc.body())
        .map(|body| body.style().get_property_value("overflow").unwrap_or_default())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn skip_link_points_to_main_landmark() {
    render_app();
    let doc = dom::document().expect("document");
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
}

#[wasm_bindgen_test]
fn body_scroll_lock_toggles_overflow() {
    BodyScrollLock.lock();
    assert_eq!(body_overflow(), "hidden");
    BodyScrollLock.unlock();
    assert_eq!(body_overflow(), "unset");
}

#[wasm_bindgen_test]
async fn registration_modal_opens_and_escape_closes_it() {
    render_app();
    let doc = dom::document().expect("document");
    let cta: HtmlElement = doc
        .query_selector(".cta .button")
        .expect("query cta")
        .expect("cta exists")
        .dyn_into()
        .expect("cast to element");
    cta.click();
    yew::platform::time::sleep(Duration::from_millis(20)).await;
    assert!(
        doc.query_selector("[role='dialog']").expect("query dialog").is_some(),
        "CTA should open the registration dialog"
    );
    assert_eq!(body_overflow(), "hidden");

    press_escape();
    settle().await;
    assert!(doc.query_selector("[role='dialog']").expect("query dialog").is_none());
    assert_eq!(body_overflow(), "unset", "closing the dialog releases the scroll lock");
}

#[wasm_bindgen_test]
async fn clicks_inside_dialog_keep_it_open() {
    render_app();
    settle().await;
    click(".cta .button");
    settle().await;
    assert!(dialog_open());

    click("[role='dialog']");
    settle().await;
    assert!(dialog_open(), "a click inside the dialog must not reach the backdrop");
    assert_eq!(body_overflow(), "hidden");

    click(".modal__close");
    settle().await;
    assert!(!dialog_open());
    assert_eq!(body_overflow(), "unset");
}

#[wasm_bindgen_test]
async fn backdrop_click_closes_dialog_and_unlocks_scroll() {
    render_app();
    settle().await;
    click(".cta .button");
    settle().await;
    assert!(dialog_open());
    assert_eq!(body_overflow(), "hidden");

    click(".modal-backdrop");
    settle().await;
    assert!(!dialog_open(), "backdrop click closes the dialog");
    assert_eq!(body_overflow(), "unset");
}

#[wasm_bindgen_test]
async fn escape_closes_item_detail_dialog() {
    yew::Renderer::<ItemDetailHost>::with_root(ensure_app_root()).render();
    settle().await;
    click("#open-item");
    settle().await;
    assert!(dialog_open());
    assert_eq!(body_overflow(), "hidden");
    let doc = dom::document().expect("document");
    let title = doc
        .query_selector("[role='dialog'] h2")
        .expect("query title")
        .expect("dialog title");
    assert_eq!(title.text_content().unwrap_or_default(), "Trucker Jacket");

    press_escape();
    settle().await;
    assert!(!dialog_open(), "Escape closes the item detail dialog");
    assert_eq!(body_overflow(), "unset");
}
