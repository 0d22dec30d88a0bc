use thriftfindr_core::{ItemRecord, LoadState, ModalAction, ModalState};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::status::{StatusKind, StatusMessage};
use crate::components::store_registration_modal::StoreRegistrationModal;
use crate::components::modal::use_modal_controller;
use crate::config::use_storefront_config;
use crate::paths::asset_path;
use crate::router::Route;

const STEPS: [(&str, &str); 3] = [
    (
        "Set Your Location",
        "Enter your city or allow location access to discover hidden gems around you.",
    ),
    (
        "Browse Stores & Items",
        "Explore curated collections, new arrivals, and unique pieces from local shops.",
    ),
    (
        "Find Your Next Treasure",
        "Visit the store, grab a bargain, and cherish your unique, sustainable find.",
    ),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let config = use_storefront_config();
    let feed = use_state(LoadState::<Vec<ItemRecord>>::default);
    let modals = use_modal_controller();
    let navigator = use_navigator();

    #[cfg(target_arch = "wasm32")]
    {
        let feed = feed.clone();
        let config = config.clone();
        use_effect_with(config.home_store_id, move |store_id| {
            let lifetime = thriftfindr_core::PageLifetime::begin();
            let guard = lifetime.clone();
            let store_id = *store_id;
            wasm_bindgen_futures::spawn_local(async move {
                let api = crate::api::WebStoreApi::from_config(&config);
                let result =
                    thriftfindr_core::load_item_feed(&api, store_id, config.carousel_count).await;
                guard.deliver(result, |result| feed.set(LoadState::from_result(result)));
            });
            move || lifetime.end()
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = &config;

    let on_discover = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        if let Some(nav) = &navigator {
            nav.push(&Route::Stores);
        }
    });
    let open_registration = modals.callback(|_: MouseEvent| ModalAction::OpenStoreRegistration);

    let freshly_found = match &*feed {
        LoadState::Loading => html! {
            <StatusMessage kind={StatusKind::Loading} message="Loading freshly found items..." />
        },
        LoadState::Failed(message) => html! {
            <StatusMessage kind={StatusKind::Error} message={message.clone()} />
        },
        LoadState::Ready(items) if items.is_empty() => html! {
            <StatusMessage kind={StatusKind::Empty} message="No fresh finds yet. Check back soon!" />
        },
        LoadState::Ready(items) => html! {
            <Carousel title="Freshly Found" items={items.clone()} />
        },
    };

    let registration = if modals.state() == ModalState::StoreRegistration {
        html! { <StoreRegistrationModal on_close={modals.close_callback()} /> }
    } else {
        Html::default()
    };

    html! {
        <div class="home">
            <section class="hero">
                <div class="hero__copy">
                    <h1>{ "Discover Thrift & Vintage " }<span class="accent">{ "Stores" }</span>{ " Near You" }</h1>
                    <p>{ "Shop unique, sustainable finds from local thrift and vintage stores. Browse inventory, find bargains, and support small businesses in your neighborhood!" }</p>
                    <form class="hero__search" onsubmit={on_discover}>
                        <label for="hero-location" class="sr-only">{ "City or ZIP code" }</label>
                        <input id="hero-location" type="text" placeholder="Enter your city or ZIP code" />
                        <button type="submit" class="button">{ "Start Discovering" }</button>
                    </form>
                </div>
                <img class="hero__art" src={asset_path("images/thrift-shop-illustration.jpg")} alt="Thrift shop illustration" />
            </section>

            <section class="freshly-found">
                { freshly_found }
            </section>

            <section class="how-it-works">
                <h2>{ "How It Works" }</h2>
                <p>{ "Find your new favorite thrift or vintage shop in 3 simple steps." }</p>
                <ol class="steps">
                    { for STEPS.iter().map(|(title, body)| html! {
                        <li class="step"><h3>{ *title }</h3><p>{ *body }</p></li>
                    }) }
                </ol>
            </section>

            <section class="cta">
                <h2>{ "Want to list your store?" }</h2>
                <p>{ "Join a growing community of local thrift and vintage businesses. Add your shop and reach thousands of shoppers nearby." }</p>
                <button type="button" class="button button--light" onclick={open_registration}>{ "List Your Store →" }</button>
            </section>

            { registration }
        </div>
    }
}
