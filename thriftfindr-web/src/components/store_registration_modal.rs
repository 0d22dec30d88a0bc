use thriftfindr_core::{FieldErrors, FormField, StoreRegistrationDraft};
use yew::prelude::*;

use super::form_field::FormInput;
use super::modal::Modal;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_close: Callback<()>,
}

#[function_component(StoreRegistrationModal)]
pub fn store_registration_modal(props: &Props) -> Html {
    let draft = use_state(StoreRegistrationDraft::default);
    let errors = use_state(FieldErrors::default);

    let on_change = {
        let draft = draft.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*draft).clone();
            match next.submit() {
                Ok(_) => {
                    draft.set(next);
                    errors.set(FieldErrors::default());
                    on_close.emit(());
                }
                Err(found) => errors.set(found),
            }
        })
    };

    let field = |id: &'static str, kind: FormField, label: &'static str, value: &str| {
        html! {
            <FormInput
                id={id}
                field={kind}
                label={label}
                value={value.to_string()}
                on_change={on_change.clone()}
                errors={(*errors).clone()}
                required={matches!(kind, FormField::Name | FormField::Address)}
                multiline={matches!(kind, FormField::Description | FormField::Story)}
            />
        }
    };

    html! {
        <Modal open={true} title="Register Your Store" on_close={props.on_close.clone()} class={classes!("store-registration")}>
            <form class="modal-form" {onsubmit}>
                { field("store-name", FormField::Name, "Store Name", &draft.name) }
                { field("store-address", FormField::Address, "Address", &draft.address) }
                { field("store-hours", FormField::Hours, "Opening Hours", &draft.hours) }
                { field("store-description", FormField::Description, "Description", &draft.description) }
                { field("store-story", FormField::Story, "Our Story", &draft.story) }
                <div class="modal-form__actions">
                    <button type="button" class="button button--ghost" onclick={props.on_close.reform(|_: MouseEvent| ())}>{ "Cancel" }</button>
                    <button type="submit" class="button">{ "Register Store" }</button>
                </div>
            </form>
        </Modal>
    }
}
