use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes={classes!("brand")}>
                    { "ThriftFindr" }
                </Link<Route>>
                <nav aria-label="Primary" class="header-nav">
                    <Link<Route> to={Route::Home} classes={classes!("nav-link")}>{ "Home" }</Link<Route>>
                    <Link<Route> to={Route::Stores} classes={classes!("nav-link")}>{ "Browse Stores" }</Link<Route>>
                </nav>
            </div>
        </header>
    }
}
