use thriftfindr_core::constants::AR_PREVIEW_IMAGE_URL;
use thriftfindr_core::{TryOnItem, TryOnView};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PanelProps {
    pub item: Option<TryOnItem>,
    pub on_back: Callback<()>,
}

/// Try-on view for whatever item navigation carried, if any.
#[function_component(TryOnPanel)]
pub fn try_on_panel(props: &PanelProps) -> Html {
    let view = TryOnView::from_state(props.item.clone());
    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let back_button = html! {
        <button type="button" class="button try-on__back" onclick={on_back}>{ "Go Back" }</button>
    };

    match &view {
        TryOnView::Missing => html! {
            <section class="try-on try-on--missing">
                <h1>{ view.title() }</h1>
                <p>{ "Pick an item from a store page and press TRY ME ON to preview it here." }</p>
                { back_button }
            </section>
        },
        TryOnView::Ready(item) => html! {
            <section class="try-on" data-item-id={item.id.to_string()}>
                <h1>{ view.title() }</h1>
                <div class="try-on__stage">
                    <figure class="try-on__item">
                        <img src={item.image_url.clone()} alt={item.name.clone()} />
                        <figcaption>
                            <span class="try-on__name">{ item.name.clone() }</span>
                            <span class="try-on__price">{ item.price.clone() }</span>
                        </figcaption>
                    </figure>
                    <figure class="try-on__preview">
                        <img src={AR_PREVIEW_IMAGE_URL} alt="AR preview" />
                        <figcaption>{ "AR preview coming soon" }</figcaption>
                    </figure>
                </div>
                if let Some(description) = item.description.clone() {
                    <p class="try-on__description">{ description }</p>
                }
                { back_button }
            </section>
        },
    }
}

#[function_component(TryOnPage)]
pub fn try_on_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let item = location
        .and_then(|location| location.state::<TryOnItem>())
        .map(|item| (*item).clone());
    let on_back = Callback::from(move |()| {
        if let Some(nav) = &navigator {
            nav.back();
        }
    });
    html! { <TryOnPanel {item} {on_back} /> }
}
