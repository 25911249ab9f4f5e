use crate::components::daisy::foundations::{DaisyColor, DaisySize, tone_class};
use folio_settings::{OptionValue, find_by_value};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectProps {
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    pub(crate) options: Vec<OptionValue>,
    pub(crate) selected: OptionValue,
    #[prop_or_default]
    pub(crate) tone: Option<DaisyColor>,
    #[prop_or(DaisySize::Md)]
    pub(crate) size: DaisySize,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onchange: Callback<OptionValue>,
}

/// Native select bound to a catalog category; reports whole entries, holds no state.
#[function_component(Select)]
pub(crate) fn select(props: &SelectProps) -> Html {
    let tone = tone_class("select", props.tone);
    let size = props.size.with_prefix("select");
    let onchange = {
        let onchange = props.onchange.clone();
        let options = props.options.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(option) = find_by_value(&options, &target.value()) {
                    onchange.emit(option.clone());
                }
            }
        })
    };

    html! {
        <fieldset class="fieldset">
            {props.title.clone().map(|title| html! {
                <legend class="fieldset-legend uppercase">{title}</legend>
            }).unwrap_or_default()}
            <select
                class={{
                    let mut classes = classes!("select", "w-full", size, props.class.clone());
                    if let Some(tone) = tone {
                        classes.push(tone);
                    }
                    classes
                }}
                value={props.selected.value().to_string()}
                onchange={onchange}
            >
                {for props.options.iter().map(|option| {
                    let selected = option == &props.selected;
                    html! {
                        <option
                            value={option.value().to_string()}
                            class={classes!(option.hint().map(ToString::to_string))}
                            selected={selected}
                        >
                            {option.label().to_string()}
                        </option>
                    }
                })}
            </select>
        </fieldset>
    }
}
