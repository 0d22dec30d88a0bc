use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Not-found page for unknown paths and unparsable store ids.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ "We couldn't find what you were looking for." }</p>
            <Link<Route> to={Route::Home} classes={classes!("button")}>{ "Back to Home" }</Link<Route>>
        </section>
    }
}
