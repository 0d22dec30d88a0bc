use thriftfindr_core::{PageMarker, PagerState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
    #[prop_or(AttrValue::Static("items"))]
    pub items_name: AttrValue,
}

#[function_component(Pagination)]
pub fn pagination(props: &Props) -> Html {
    let pager = PagerState::new(props.current_page, props.total_pages);
    if !pager.is_visible() {
        return Html::default();
    }

    let go_to = |page: usize| {
        let cb = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| cb.emit(page))
    };

    let markers = pager.markers().into_iter().enumerate().map(|(index, marker)| match marker {
        PageMarker::Ellipsis => html! {
            <li key={format!("gap-{index}")}><span class="pager__gap">{"..."}</span></li>
        },
        PageMarker::Page(page) => {
            let current = page == pager.current();
            html! {
                <li key={format!("page-{page}")}>
                    <button
                        type="button"
                        class={classes!("pager__page", current.then_some("pager__page--current"))}
                        aria-current={current.then_some("page")}
                        onclick={go_to(page)}
                    >
                        { page }
                    </button>
                </li>
            }
        }
    });

    html! {
        <nav class="pager" aria-label={format!("Pagination for {}", props.items_name)}>
            <ul>
                <li>
                    <button type="button" class="pager__prev" disabled={!pager.has_previous()} onclick={go_to(pager.previous())}>
                        <span class="sr-only">{ format!("Previous page of {}", props.items_name) }</span>
                        {"‹"}
                    </button>
                </li>
                { for markers }
                <li>
                    <button type="button" class="pager__next" disabled={!pager.has_next()} onclick={go_to(pager.next())}>
                        <span class="sr-only">{ format!("Next page of {}", props.items_name) }</span>
                        {"›"}
                    </button>
                </li>
            </ul>
        </nav>
    }
}
