use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DividerProps {
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(Divider)]
pub(crate) fn divider(props: &DividerProps) -> Html {
    html! { <div class={classes!("divider", props.class.clone())}></div> }
}
