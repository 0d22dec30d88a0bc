use thriftfindr_core::{ScrollDirection, ScrollLock, ScrollMetrics};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, KeyboardEvent, Response, ScrollBehavior, ScrollToOptions, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if there is no window, the request fails, or the result is not a `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read the scroll position and extent of a container.
#[must_use]
pub fn scroll_metrics(element: &Element) -> ScrollMetrics {
    ScrollMetrics::new(
        f64::from(element.scroll_left()),
        f64::from(element.scroll_width()),
        f64::from(element.client_width()),
    )
}

/// Smoothly scroll a container one step in `direction`.
pub fn smooth_scroll(element: &Element, direction: ScrollDirection) {
    let options = ScrollToOptions::new();
    options.set_left(direction.delta());
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_by_with_scroll_to_options(&options);
}

/// Stops page scrolling by setting `overflow` on `<body>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        set_body_overflow("hidden");
    }

    fn unlock(&self) {
        set_body_overflow("unset");
    }
}

#[cfg(target_arch = "wasm32")]
fn set_body_overflow(value: &str) {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        return;
    };
    if let Err(err) = body.style().set_property("overflow", value) {
        log::error!("Unable to set body overflow: {}", js_error_message(&err));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_body_overflow(_value: &str) {}

/// Document-level `keydown` listener, removed on drop.
pub struct KeydownListener {
    target: Document,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeydownListener {
    /// Attach `on_key` to the document; `None` outside a browser.
    pub fn attach(mut on_key: impl FnMut(String) + 'static) -> Option<Self> {
        let target = document()?;
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            on_key(event.key());
        });
        target
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(|err| log::error!("Unable to listen for keys: {}", js_error_message(&err)))
            .ok()?;
        Some(Self { target, closure })
    }
}

impl Drop for KeydownListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", self.closure.as_ref().unchecked_ref());
    }
}
