use thriftfindr_core::{FieldErrors, FormField, NewItemDraft};
use yew::prelude::*;

use super::form_field::FormInput;
use super::modal::Modal;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_close: Callback<()>,
}

/// Local-only form for listing a new item.
#[function_component(NewItemModal)]
pub fn new_item_modal(props: &Props) -> Html {
    let draft = use_state(NewItemDraft::default);
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
                required={matches!(kind, FormField::Name | FormField::Price)}
                multiline={kind == FormField::Description}
            />
        }
    };

    html! {
        <Modal open={true} title="List a New Item" on_close={props.on_close.clone()} class={classes!("new-item")}>
            <form class="modal-form" {onsubmit}>
                { field("new-item-name", FormField::Name, "Item Name", &draft.name) }
                { field("new-item-price", FormField::Price, "Price", &draft.price) }
                { field("new-item-tags", FormField::Tags, "Tags (comma separated)", &draft.tags) }
                { field("new-item-description", FormField::Description, "Description", &draft.description) }
                { field("new-item-image", FormField::ImageUrl, "Image URL", &draft.image_url) }
                <div class="modal-form__actions">
                    <button type="button" class="button button--ghost" onclick={props.on_close.reform(|_: MouseEvent| ())}>{ "Cancel" }</button>
                    <button type="submit" class="button">{ "Submit Item" }</button>
                </div>
            </form>
        </Modal>
    }
}
