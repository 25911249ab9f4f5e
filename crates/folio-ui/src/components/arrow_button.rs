//! Toggle control for the settings panel.
//!
//! # Design
//! - Stateless: renders from `is_open`, reports activation through `on_click`.
//! - Never flips visibility itself; the owning panel decides.

use crate::core::toggle::{is_activation_key, toggle_classes};
use crate::i18n::{Label, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ArrowButtonProps {
    #[prop_or_default]
    pub(crate) is_open: bool,
    #[prop_or_default]
    pub(crate) on_click: Callback<()>,
}

#[function_component(ArrowButton)]
pub(crate) fn arrow_button(props: &ArrowButtonProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let (container_class, arrow_class) = toggle_classes(props.is_open);
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };
    let onkeydown = {
        let on_click = props.on_click.clone();
        Callback::from(move |event: KeyboardEvent| {
            if is_activation_key(&event.key()) {
                event.prevent_default();
                on_click.emit(());
            }
        })
    };

    html! {
        <div
            role="button"
            tabindex="0"
            aria-label={bundle.label(Label::ToggleHint)}
            aria-expanded={props.is_open.to_string()}
            class={container_class}
            onclick={onclick}
            onkeydown={onkeydown}
        >
            <span
                class={classes!("iconify", "lucide--chevron-right", "size-6", arrow_class)}
                aria-hidden="true"
                title={bundle.label(Label::ToggleIcon)}
            ></span>
        </div>
    }
}
