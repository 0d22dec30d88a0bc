use thriftfindr_core::CategoryPill;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub pills: Vec<CategoryPill>,
    pub on_toggle: Callback<String>,
}

#[function_component(CategoryPills)]
pub fn category_pills(props: &Props) -> Html {
    html! {
        <div class="category-pills" role="group" aria-label="Filter by category">
            { for props.pills.iter().map(|pill| {
                let onclick = {
                    let cb = props.on_toggle.clone();
                    let name = pill.name.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(name.clone()))
                };
                let accent = pill
                    .active
                    .then(|| pill.color.as_ref().map(thriftfindr_core::ColorTag::css_class))
                    .flatten();
                html! {
                    <button
                        key={pill.name.clone()}
                        type="button"
                        class={classes!("pill", pill.active.then_some("pill--active"), accent)}
                        aria-pressed={pill.active.to_string()}
                        {onclick}
                    >
                        { pill.name.clone() }
                    </button>
                }
            }) }
        </div>
    }
}
