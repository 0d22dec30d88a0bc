use std::rc::Rc;

use thriftfindr_core::StorefrontConfig;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::pages::store_detail::StoreDetailPage;
use crate::pages::stores::StoresPage;
use crate::pages::try_on::TryOnPage;
use crate::router::{Route, parse_store_id};

/// Map a route to its page.
#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Stores => html! { <StoresPage /> },
        Route::StoreDetail { id } => parse_store_id(&id).map_or_else(
            || html! { <NotFound /> },
            |store_id| html! { <StoreDetailPage {store_id} /> },
        ),
        Route::TryOn => html! { <TryOnPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Layout and page switch; expects a router above it.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let config = use_memo((), |_| crate::config::storefront_config());
    let config: Rc<StorefrontConfig> = config;
    html! {
        <ContextProvider<Rc<StorefrontConfig>> context={config}>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </ContextProvider<Rc<StorefrontConfig>>>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppShell />
        </BrowserRouter>
    }
}
