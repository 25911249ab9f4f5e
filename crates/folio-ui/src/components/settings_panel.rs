//! Reader settings side panel.
//!
//! # Design
//! - The `PanelController` lives in a mutable ref for the component's lifetime; it is seeded
//!   from `current_settings` on mount only.
//! - Sub-controls receive `(options, selected)` and report whole entries back.
//! - The outside-click hook follows the controller's open state.

use crate::components::arrow_button::ArrowButton;
use crate::components::daisy::{
    Button, DaisyColor, DaisySize, DaisyVariant, Divider, RadioGroup, Select, Text,
};
use crate::components::outside_click::use_outside_click_close;
use crate::core::panel::{PanelAction, PanelController};
use crate::i18n::{Label, TranslationBundle};
use folio_settings::{FieldKey, OptionCatalog, OptionValue, SettingsState};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsPanelProps {
    /// Committed settings; read once when the panel mounts.
    pub(crate) current_settings: SettingsState,
    #[prop_or_default]
    pub(crate) catalog: Rc<OptionCatalog>,
    #[prop_or_default]
    pub(crate) on_apply: Callback<SettingsState>,
}

#[function_component(SettingsPanel)]
pub(crate) fn settings_panel(props: &SettingsPanelProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let t = |label: Label| bundle.label(label);
    let seed = (
        props.current_settings.clone(),
        props.catalog.defaults().clone(),
        props.on_apply.clone(),
    );
    let controller = use_mut_ref(move || {
        let (current, defaults, on_apply) = seed;
        PanelController::new(&current, defaults, on_apply)
    });
    controller
        .borrow_mut()
        .receive_props(&props.current_settings, props.on_apply.clone());
    let force_update = use_force_update();
    let root = use_node_ref();

    let dispatch = {
        let controller = controller.clone();
        Callback::from(move |action: PanelAction| {
            controller.borrow_mut().dispatch(action);
            force_update.force_update();
        })
    };

    let (is_open, draft) = {
        let controller = controller.borrow();
        (controller.is_open(), controller.draft().clone())
    };

    let on_outside = {
        let dispatch = dispatch.clone();
        Callback::from(move |open: bool| {
            if !open {
                dispatch.emit(PanelAction::OutsideInteraction);
            }
        })
    };
    use_outside_click_close(is_open, root.clone(), on_outside);

    let on_toggle = dispatch.reform(|()| PanelAction::Toggle);
    let on_field = |key: FieldKey| {
        dispatch.reform(move |value: OptionValue| PanelAction::FieldChanged { key, value })
    };
    let onsubmit = dispatch.reform(|event: SubmitEvent| {
        event.prevent_default();
        PanelAction::Apply
    });
    let onreset = dispatch.reform(|event: MouseEvent| {
        event.prevent_default();
        PanelAction::Reset
    });
    let options = |key: FieldKey| props.catalog.options(key).to_vec();

    html! {
        <div ref={root} class="settings-panel-root">
            <ArrowButton is_open={is_open} on_click={on_toggle} />
            <aside class={classes!("settings-panel", is_open.then_some("settings-panel-open"))}>
                <form class="flex flex-col gap-6 p-8" onsubmit={onsubmit}>
                    <Text tag="h2" uppercase=true class="text-3xl font-extrabold">
                        {t(Label::PanelTitle)}
                    </Text>
                    <Select
                        title={t(Label::field(FieldKey::FontFamily))}
                        options={options(FieldKey::FontFamily)}
                        selected={draft.font_family.clone()}
                        onchange={on_field(FieldKey::FontFamily)}
                    />
                    <RadioGroup
                        name="font-size"
                        title={t(Label::field(FieldKey::FontSize))}
                        size={DaisySize::Sm}
                        options={options(FieldKey::FontSize)}
                        selected={draft.font_size.clone()}
                        onchange={on_field(FieldKey::FontSize)}
                    />
                    <Select
                        title={t(Label::field(FieldKey::FontColor))}
                        options={options(FieldKey::FontColor)}
                        selected={draft.font_color.clone()}
                        onchange={on_field(FieldKey::FontColor)}
                    />
                    <Divider />
                    <Select
                        title={t(Label::field(FieldKey::BackgroundColor))}
                        options={options(FieldKey::BackgroundColor)}
                        selected={draft.background_color.clone()}
                        onchange={on_field(FieldKey::BackgroundColor)}
                    />
                    <Select
                        title={t(Label::field(FieldKey::ContentWidth))}
                        options={options(FieldKey::ContentWidth)}
                        selected={draft.content_width.clone()}
                        onchange={on_field(FieldKey::ContentWidth)}
                    />
                    <div class="flex justify-end gap-3 mt-auto">
                        <Button
                            r#type="reset"
                            tone={DaisyColor::Neutral}
                            variant={DaisyVariant::Outline}
                            onclick={onreset}
                        >
                            {t(Label::Reset)}
                        </Button>
                        <Button r#type="submit" tone={DaisyColor::Primary}>
                            {t(Label::Apply)}
                        </Button>
                    </div>
                </form>
            </aside>
        </div>
    }
}
