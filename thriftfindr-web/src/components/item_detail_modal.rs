use thriftfindr_core::{ItemDetailView, ItemRecord, TryOnItem};
use yew::prelude::*;

use super::modal::Modal;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: ItemRecord,
    pub on_close: Callback<()>,
    pub on_try_on: Callback<TryOnItem>,
}

#[function_component(ItemDetailModal)]
pub fn item_detail_modal(props: &Props) -> Html {
    let item = &props.item;
    let view = ItemDetailView::from_item(item);
    let try_on = {
        let cb = props.on_try_on.clone();
        let carried = TryOnItem::from(item);
        Callback::from(move |_: MouseEvent| cb.emit(carried.clone()))
    };

    html! {
        <Modal open={true} title={item.name.clone()} on_close={props.on_close.clone()} class={classes!("item-detail")}>
            <div class="item-detail__layout">
                <img src={item.image_url.clone()} alt={item.name.clone()} class="item-detail__image" />
                <div class="item-detail__info">
                    <div class="item-detail__tags">
                        { for view.top_tags.iter().map(|tag| html! { <span class="pill pill--static">{ tag.clone() }</span> }) }
                    </div>
                    <p class="item-detail__price">{ view.price.clone() }</p>
                    if let Some(original) = item.display_original_price() {
                        <p class="item-detail__original-price"><s>{ original }</s></p>
                    }
                    if let Some(brand) = item.brand.clone() {
                        <p class="item-detail__brand">{ brand }</p>
                    }
                    <p class="item-detail__description">{ view.description.clone() }</p>
                    <div class="item-detail__category">
                        <span class="label">{ "Category" }</span>
                        <span class="pill pill--static">{ view.category_label.clone() }</span>
                    </div>
                    <button type="button" class="item-detail__try-on" onclick={try_on}>{ "TRY ME ON" }</button>
                </div>
            </div>
        </Modal>
    }
}
