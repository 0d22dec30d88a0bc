use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
    Empty,
}

impl StatusKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Loading => "status status--loading",
            Self::Error => "status status--error",
            Self::Empty => "status status--empty",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub kind: StatusKind,
    pub message: AttrValue,
}

/// One-line page status: loading, error or an empty result.
#[function_component(StatusMessage)]
pub fn status_message(props: &Props) -> Html {
    let text = match props.kind {
        StatusKind::Error => format!("Error: {}", props.message),
        _ => props.message.to_string(),
    };
    let role = if props.kind == StatusKind::Error { "alert" } else { "status" };
    html! {
        <p class={props.kind.class()} role={role}>{ text }</p>
    }
}
