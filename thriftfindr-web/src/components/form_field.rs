use thriftfindr_core::{FieldErrors, FormField};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Current value of the input or textarea that fired `event`.
#[must_use]
pub fn event_value(event: &InputEvent) -> String {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub field: FormField,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<(FormField, String)>,
    #[prop_or_default]
    pub errors: FieldErrors,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub multiline: bool,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

/// Labelled input with its inline validation message.
#[function_component(FormInput)]
pub fn form_input(props: &Props) -> Html {
    let oninput = {
        let cb = props.on_change.clone();
        let field = props.field;
        Callback::from(move |e: InputEvent| cb.emit((field, event_value(&e))))
    };
    let error = props.errors.for_field(props.field).map(ToString::to_string);
    let error_id = format!("{}-error", props.id);
    let described_by = error.as_ref().map(|_| error_id.clone());

    let control = if props.multiline {
        html! {
            <textarea
                id={props.id.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                aria-invalid={error.is_some().to_string()}
                aria-describedby={described_by.clone()}
                {oninput}
            />
        }
    } else {
        html! {
            <input
                type="text"
                id={props.id.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                aria-invalid={error.is_some().to_string()}
                aria-describedby={described_by}
                {oninput}
            />
        }
    };

    html! {
        <div class="form-field">
            <label for={props.id.clone()}>
                { props.label.clone() }
                if props.required { <span class="required" aria-hidden="true">{" *"}</span> }
            </label>
            { control }
            if let Some(message) = error {
                <p id={error_id} class="form-field__error">{ message }</p>
            }
        </div>
    }
}
