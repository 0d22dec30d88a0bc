#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod logging;
pub mod pages;
pub mod paths;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init(log::LevelFilter::Info) {
        dom::console_error(&format!("Console logger unavailable: {err}"));
    }
    yew::Renderer::<app::App>::new().render();
}
