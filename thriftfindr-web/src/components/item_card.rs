use thriftfindr_core::ItemRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: ItemRecord,
    pub on_view: Callback<ItemRecord>,
}

#[function_component(ItemCard)]
pub fn item_card(props: &Props) -> Html {
    let item = &props.item;
    let onclick = {
        let cb = props.on_view.clone();
        let item = item.clone();
        Callback::from(move |_: MouseEvent| cb.emit(item.clone()))
    };
    html! {
        <article class="item-card" data-item-id={item.id.to_string()}>
            <img src={item.image_url.clone()} alt={item.name.clone()} class="item-card__image" />
            <div class="item-card__body">
                <div class="item-card__heading">
                    <h3 title={item.name.clone()}>{ item.name.clone() }</h3>
                    <p class="item-card__price">{ item.display_price() }</p>
                </div>
                <p class="item-card__tags">{ item.tag_summary() }</p>
                <button type="button" class="item-card__view" {onclick}>{ "View Item" }</button>
            </div>
        </article>
    }
}
