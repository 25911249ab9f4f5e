//! Hook that closes a component when the pointer goes down outside its root.
//!
//! # Design
//! - The document listener lives in a `ListenerSlot`; it exists only while `is_open` is true.
//! - Effect cleanup releases the listener on close and on unmount.

use crate::core::outside::{ListenerSlot, Region, close_request};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

/// Root region backed by a rendered element.
struct RootRef<'a>(&'a NodeRef);

impl Region for RootRef<'_> {
    type Target = Node;

    fn contains(&self, target: &Node) -> bool {
        self.0
            .cast::<Node>()
            .is_some_and(|root| root.contains(Some(target)))
    }
}

/// Request `on_change(false)` for every `mousedown` outside `root` while `is_open`.
#[hook]
pub(crate) fn use_outside_click_close(is_open: bool, root: NodeRef, on_change: Callback<bool>) {
    let slot = use_mut_ref(ListenerSlot::<EventListener>::default);
    use_effect_with_deps(
        move |is_open| {
            let is_open = *is_open;
            slot.borrow_mut().sync(is_open, || {
                EventListener::new(&gloo::utils::document(), "mousedown", move |event| {
                    let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok())
                    else {
                        return;
                    };
                    if let Some(next) = close_request(is_open, &RootRef(&root), &target) {
                        on_change.emit(next);
                    }
                })
            });
            move || slot.borrow_mut().release()
        },
        is_open,
    );
}
