use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use thriftfindr_core::{ModalAction, ModalController, ModalState};
use yew::prelude::*;

use crate::dom::BodyScrollLock;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

/// Page-scoped access to the single open modal.
#[derive(Clone)]
pub struct ModalHandle {
    controller: Rc<RefCell<ModalController<BodyScrollLock>>>,
    refresh: UseForceUpdateHandle,
}

impl PartialEq for ModalHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

impl ModalHandle {
    #[must_use]
    pub fn state(&self) -> ModalState {
        self.controller.borrow().state().clone()
    }

    pub fn dispatch(&self, action: ModalAction) {
        let changed = self.controller.borrow_mut().apply(action);
        if changed {
            self.refresh.force_update();
        }
    }

    pub fn callback<IN: 'static>(
        &self,
        to_action: impl Fn(IN) -> ModalAction + 'static,
    ) -> Callback<IN> {
        let handle = self.clone();
        Callback::from(move |input| handle.dispatch(to_action(input)))
    }

    #[must_use]
    pub fn close_callback(&self) -> Callback<()> {
        self.callback(|()| ModalAction::Close)
    }
}

/// Own a modal controller for the calling page.
///
/// Escape closes the open modal, and unmounting the page closes it too so
/// the body scroll lock never outlives the page.
#[hook]
pub fn use_modal_controller() -> ModalHandle {
    let controller = use_mut_ref(|| ModalController::new(BodyScrollLock));
    let refresh = use_force_update();
    let handle = ModalHandle {
        controller,
        refresh,
    };

    {
        let controller = handle.controller.clone();
        use_effect_with((), move |_| {
            move || {
                controller.borrow_mut().close();
            }
        });
    }

    #[cfg(target_arch = "wasm32")]
    {
        let is_open = handle.state().is_open();
        let listener_handle = handle.clone();
        use_effect_with(is_open, move |open| {
            let listener = if *open {
                crate::dom::KeydownListener::attach(move |key| {
                    listener_handle.dispatch(ModalAction::Key(key));
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    handle
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Backdrop and dialog frame. Clicks inside the dialog never reach the backdrop.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    if !props.open {
        return Html::default();
    }
    let title_id = format!("modal-title-{}", *modal_id);

    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_close_button = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_backdrop}>
            <div
                class={classes!("modal", props.class.clone())}
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                onclick={swallow_click}
            >
                <div class="modal__header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label="Close dialog" onclick={on_close_button}>
                        {"×"}
                    </button>
                </div>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
