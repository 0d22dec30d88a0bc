use thriftfindr_core::StoreRecord;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub store: StoreRecord,
}

#[function_component(StoreCard)]
pub fn store_card(props: &Props) -> Html {
    let store = &props.store;
    html! {
        <article class="store-card" data-store-id={store.id.to_string()}>
            <img src={store.image_url.clone()} alt={format!("Image of {}", store.name)} class="store-card__image" />
            <div class="store-card__body">
                <h3>{ store.name.clone() }</h3>
                <p class="store-card__location">{ format!("{} - {}", store.distance_label(), store.address) }</p>
                <div class="store-card__categories">
                    { for store.categories().iter().map(|name| html! {
                        <span class="pill pill--static">{ *name }</span>
                    }) }
                </div>
                <p class="store-card__description">{ store.description() }</p>
                <Link<Route> to={Route::store_detail(store.id)} classes={classes!("store-card__link")}>
                    { "View Store" }
                </Link<Route>>
            </div>
        </article>
    }
}
