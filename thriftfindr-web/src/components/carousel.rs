use thriftfindr_core::{ItemRecord, ScrollAffordance, ScrollDirection};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub items: Vec<ItemRecord>,
}

/// Horizontal strip of item cards with left/right scroll arrows.
#[function_component(Carousel)]
pub fn carousel(props: &Props) -> Html {
    let strip_ref = use_node_ref();
    let affordance = use_state(ScrollAffordance::default);

    let measure = {
        let strip_ref = strip_ref.clone();
        let affordance = affordance.clone();
        move || {
            if let Some(strip) = strip_ref.cast::<web_sys::Element>() {
                affordance.set(ScrollAffordance::from_metrics(crate::dom::scroll_metrics(&strip)));
            }
        }
    };

    #[cfg(target_arch = "wasm32")]
    {
        let measure = measure.clone();
        use_effect_with(props.items.clone(), move |_| {
            measure();
            || ()
        });
    }

    let onscroll = {
        let measure = measure.clone();
        Callback::from(move |_: Event| measure())
    };
    let scroll = |direction: ScrollDirection| {
        let strip_ref = strip_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(strip) = strip_ref.cast::<web_sys::Element>() {
                crate::dom::smooth_scroll(&strip, direction);
            }
        })
    };

    html! {
        <section class="carousel" aria-label={props.title.clone()}>
            <h2>{ props.title.clone() }</h2>
            <div class="carousel__frame">
                if affordance.can_scroll_left {
                    <button type="button" class="carousel__arrow carousel__arrow--left" aria-label="Scroll left" onclick={scroll(ScrollDirection::Left)}>
                        {"‹"}
                    </button>
                }
                <div class="carousel__strip" ref={strip_ref.clone()} {onscroll}>
                    { for props.items.iter().map(|item| html! {
                        <div key={item.id.to_string()} class="carousel__card">
                            <img src={item.image_url.clone()} alt={item.name.clone()} />
                            <h3>{ item.name.clone() }</h3>
                            <p class="carousel__price">{ item.display_price() }</p>
                            <p class="carousel__store">{ format!("Store ID: {}", item.store_id) }</p>
                        </div>
                    }) }
                </div>
                if affordance.can_scroll_right {
                    <button type="button" class="carousel__arrow carousel__arrow--right" aria-label="Scroll right" onclick={scroll(ScrollDirection::Right)}>
                        {"›"}
                    </button>
                }
            </div>
        </section>
    }
}
