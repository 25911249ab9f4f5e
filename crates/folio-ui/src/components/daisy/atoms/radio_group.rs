use crate::components::daisy::foundations::DaisySize;
use folio_settings::OptionValue;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RadioGroupProps {
    pub(crate) name: AttrValue,
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    pub(crate) options: Vec<OptionValue>,
    pub(crate) selected: OptionValue,
    #[prop_or(DaisySize::Md)]
    pub(crate) size: DaisySize,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onchange: Callback<OptionValue>,
}

/// Radio row for a catalog category; `checked` always mirrors `selected`.
#[function_component(RadioGroup)]
pub(crate) fn radio_group(props: &RadioGroupProps) -> Html {
    let size = props.size.with_prefix("radio");
    html! {
        <fieldset class={classes!("fieldset", props.class.clone())}>
            {props.title.clone().map(|title| html! {
                <legend class="fieldset-legend uppercase">{title}</legend>
            }).unwrap_or_default()}
            <div class="flex flex-wrap gap-4">
                {for props.options.iter().map(|option| {
                    let onclick = {
                        let onchange = props.onchange.clone();
                        let option = option.clone();
                        Callback::from(move |_: MouseEvent| onchange.emit(option.clone()))
                    };
                    html! {
                        <label class={classes!("label", "cursor-pointer", "gap-2", option.hint().map(ToString::to_string))}>
                            <input
                                type="radio"
                                name={props.name.clone()}
                                value={option.value().to_string()}
                                class={classes!("radio", size.clone())}
                                checked={option == &props.selected}
                                onclick={onclick}
                            />
                            <span>{option.label().to_string()}</span>
                        </label>
                    }
                })}
            </div>
        </fieldset>
    }
}
