use yew::prelude::*;

use super::footer::Footer;
use super::header::Header;
use crate::a11y::{STATUS_REGION_ID, visible_focus_css};

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <>
            <style>{ visible_focus_css() }</style>
            <Header />
            <main id="main" role="main" class="site-main">
                { for props.children.iter() }
            </main>
            <div id={STATUS_REGION_ID} class="sr-only" aria-live="polite"></div>
            <Footer />
        </>
    }
}
