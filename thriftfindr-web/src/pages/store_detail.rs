use thriftfindr_core::{
    BrowseState, EmptyReason, ItemRecord, LoadState, ModalAction, ModalState, StoreDetail,
    TryOnItem,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::category_pills::CategoryPills;
use crate::components::form_field::event_value;
use crate::components::item_card::ItemCard;
use crate::components::item_detail_modal::ItemDetailModal;
use crate::components::modal::use_modal_controller;
use crate::components::new_item_modal::NewItemModal;
use crate::components::pagination::Pagination;
use crate::components::status::{StatusKind, StatusMessage};
use crate::config::use_storefront_config;
use crate::router::Route;

const STORE_STORY: &str = "Founded with a passion for pre-loved items, we aim to bring you a curated collection of the best thrift finds. Every item has a story, and we're excited to help you write its next chapter.";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub store_id: u64,
}

#[function_component(StoreDetailPage)]
pub fn store_detail_page(props: &Props) -> Html {
    let config = use_storefront_config();
    let detail = use_state(LoadState::<StoreDetail>::default);
    let browse = {
        let page_size = config.item_page_size;
        use_state(move || BrowseState::store_detail(page_size))
    };
    let modals = use_modal_controller();
    let navigator = use_navigator();

    #[cfg(target_arch = "wasm32")]
    {
        let detail = detail.clone();
        let browse = browse.clone();
        let config = config.clone();
        use_effect_with(props.store_id, move |store_id| {
            let store_id = *store_id;
            detail.set(LoadState::Loading);
            browse.set(BrowseState::store_detail(config.item_page_size));
            let lifetime = thriftfindr_core::PageLifetime::begin();
            let guard = lifetime.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = crate::api::WebStoreApi::from_config(&config);
                let result = thriftfindr_core::load_store_detail(&api, store_id).await;
                guard.deliver(result, |result| detail.set(LoadState::from_result(result)));
            });
            move || lifetime.end()
        });
    }

    #[cfg(target_arch = "wasm32")]
    {
        let visible_count = detail
            .ready()
            .map(|loaded| browse.apply(&loaded.items).total_matches);
        use_effect_with(visible_count, |count| {
            if let Some(count) = *count {
                crate::a11y::announce(&crate::a11y::results_summary(count, "items"));
            }
            || ()
        });
    }

    let on_view = modals.callback(ModalAction::OpenItemDetail);
    let on_try_on = {
        let modals = modals.clone();
        Callback::from(move |item: TryOnItem| {
            modals.dispatch(ModalAction::Close);
            if let Some(nav) = &navigator {
                nav.push_with_state(&Route::TryOn, item);
            }
        })
    };

    let loaded = match &*detail {
        LoadState::Loading => {
            return html! {
                <StatusMessage kind={StatusKind::Loading} message="Loading store details..." />
            };
        }
        LoadState::Failed(message) => {
            return html! {
                <StatusMessage kind={StatusKind::Error} message={message.clone()} />
            };
        }
        LoadState::Ready(loaded) => loaded,
    };
    let store = &loaded.store;

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
            let mut next = (*browse).clone();
            next.toggle_category(&name);
            browse.set(next);
        })
    };

    let on_clear = {
        let browse = browse.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*browse).clone();
            next.clear_categories();
            browse.set(next);
        })
    };

    let page = browse.apply(&loaded.items);
    let on_page = {
        let browse = browse.clone();
        let total = page.total_pages;
        Callback::from(move |target: usize| {
            let mut next = (*browse).clone();
            next.go_to_page(target, total);
            browse.set(next);
        })
    };

    let card = |item: &ItemRecord| {
        html! { <ItemCard key={item.id.to_string()} item={item.clone()} on_view={on_view.clone()} /> }
    };

    let featured = loaded.featured(config.featured_count);
    let featured_section = if featured.is_empty() {
        html! { <StatusMessage kind={StatusKind::Empty} message="No featured items available at this store currently." /> }
    } else {
        html! { <div class="item-grid">{ for featured.iter().map(&card) }</div> }
    };

    let all_items = match browse.empty_reason(loaded.items.len(), page.total_matches) {
        Some(reason) => html! {
            <>
                <StatusMessage kind={StatusKind::Empty} message={reason.message()} />
                if reason == EmptyReason::NoCategoryMatches {
                    <button type="button" class="button button--ghost all-items__clear" onclick={on_clear}>
                        { "Clear filters" }
                    </button>
                }
            </>
        },
        None => html! {
            <div class="item-grid">{ for page.items.iter().map(|item| card(*item)) }</div>
        },
    };

    let modal = match modals.state() {
        ModalState::ItemDetail(item) => html! {
            <ItemDetailModal {item} on_close={modals.close_callback()} {on_try_on} />
        },
        ModalState::NewItem => html! {
            <NewItemModal on_close={modals.close_callback()} />
        },
        ModalState::Closed | ModalState::StoreRegistration => Html::default(),
    };

    html! {
        <div class="store-detail" data-store-id={store.id.to_string()}>
            <section class="store-hero">
                <img src={store.image_url.clone()} alt={format!("{} logo", store.name)} class="store-hero__logo" />
                <div class="store-hero__info">
                    <h1>{ store.name.clone() }</h1>
                    <p class="store-hero__address">{ store.address.clone() }</p>
                    <p class="store-hero__hours">{ format!("Hours: {}", store.hours) }</p>
                    <p class="store-hero__description">{ store.description() }</p>
                </div>
                <button type="button" class="button button--light" onclick={modals.callback(|_: MouseEvent| ModalAction::OpenNewItem)}>
                    { "Your Store? List Items Here" }
                </button>
            </section>

            <section class="store-story">
                <h2>{ "Our Story" }</h2>
                <p>{ STORE_STORY }</p>
            </section>

            <section class="featured-items">
                <h2>{ "Featured Items" }</h2>
                { featured_section }
            </section>

            <section class="all-items">
                <div class="all-items__header">
                    <h2>{ format!("All Items ({})", page.total_matches) }</h2>
                    <label for="item-search" class="sr-only">{ "Search items" }</label>
                    <input
                        id="item-search"
                        type="search"
                        placeholder="Search items... (e.g., jacket, tags)"
                        value={browse.search_term().to_string()}
                        oninput={on_search}
                    />
                </div>
                <CategoryPills pills={browse.categories().pills().to_vec()} on_toggle={on_toggle} />
                { all_items }
                <Pagination
                    current_page={page.current_page}
                    total_pages={page.total_pages}
                    on_page_change={on_page}
                    items_name="items"
                />
            </section>

            { modal }
        </div>
    }
}
