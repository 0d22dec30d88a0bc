use thriftfindr_core::{BrowseState, LoadState, StoreRecord};
use yew::prelude::*;

use crate::components::category_pills::CategoryPills;
use crate::components::form_field::event_value;
use crate::components::pagination::Pagination;
use crate::components::status::{StatusKind, StatusMessage};
use crate::components::store_card::StoreCard;
use crate::config::use_storefront_config;

#[function_component(StoresPage)]
pub fn stores_page() -> Html {
    let config = use_storefront_config();
    let stores = use_state(LoadState::<Vec<StoreRecord>>::default);
    let browse = {
        let page_size = config.listing_page_size;
        use_state(move || BrowseState::store_listing(page_size))
    };

    #[cfg(target_arch = "wasm32")]
    {
        let stores = stores.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            let lifetime = thriftfindr_core::PageLifetime::begin();
            let guard = lifetime.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = crate::api::WebStoreApi::from_config(&config);
                let result = thriftfindr_core::load_store_listing(&api).await;
                guard.deliver(result, |result| stores.set(LoadState::from_result(result)));
            });
            move || lifetime.end()
        });
    }

    #[cfg(target_arch = "wasm32")]
    {
        let visible_count = stores.ready().map(|records| browse.apply(records).total_matches);
        use_effect_with(visible_count, |count| {
            if let Some(count) = *count {
                crate::a11y::announce(&crate::a11y::results_summary(count, "stores"));
            }
            || ()
        });
    }

    let on_search = {
        let browse = browse.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*browse).clone();
            next.set_search_term(event_value(&e));
            browse.set(next);
        })
    };
    let on_toggle = {
        let browse = browse.clone();
        Callback::from(move |name: String| {
            log::debug!("Category pill clicked: {name}");
            let mut next = (*browse).clone();
            next.toggle_category(&name);
            browse.set(next);
        })
    };

    let listing = match &*stores {
        LoadState::Loading => html! {
            <StatusMessage kind={StatusKind::Loading} message="Loading stores..." />
        },
        LoadState::Failed(message) => html! {
            <StatusMessage kind={StatusKind::Error} message={message.clone()} />
        },
        LoadState::Ready(records) => {
            let page = browse.apply(records);
            if page.items.is_empty() {
                html! { <StatusMessage kind={StatusKind::Empty} message="No stores found." /> }
            } else {
                let on_page = {
                    let browse = browse.clone();
                    let total = page.total_pages;
                    Callback::from(move |target: usize| {
                        let mut next = (*browse).clone();
                        next.go_to_page(target, total);
                        browse.set(next);
                    })
                };
                html! {
                    <>
                        <div class="store-grid">
                            { for page.items.iter().map(|store| html! {
                                <StoreCard key={store.id.to_string()} store={(*store).clone()} />
                            }) }
                        </div>
                        <Pagination
                            current_page={page.current_page}
                            total_pages={page.total_pages}
                            on_page_change={on_page}
                            items_name="stores"
                        />
                    </>
                }
            }
        }
    };

    html! {
        <div class="stores-page">
            <section class="stores-page__search">
                <label for="store-search" class="sr-only">{ "Search for stores" }</label>
                <input
                    id="store-search"
                    type="search"
                    placeholder="Search for stores..."
                    value={browse.search_term().to_string()}
                    oninput={on_search}
                />
            </section>
            <section class="stores-page__filters">
                <CategoryPills pills={browse.categories().pills().to_vec()} on_toggle={on_toggle} />
            </section>
            <section class="stores-page__results">
                <h2>{ "Nearby Stores" }</h2>
                { listing }
            </section>
        </div>
    }
}
