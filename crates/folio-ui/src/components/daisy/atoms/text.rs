use yew::prelude::*;
use yew::virtual_dom::VTag;

#[derive(Properties, PartialEq)]
pub(crate) struct TextProps {
    #[prop_or(AttrValue::Static("div"))]
    pub(crate) tag: AttrValue,
    #[prop_or_default]
    pub(crate) uppercase: bool,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Children,
}

/// Text block rendered under a caller-chosen tag (`h2`, `p`, ...).
#[function_component(Text)]
pub(crate) fn text(props: &TextProps) -> Html {
    let mut node = VTag::new(props.tag.to_string());
    let classes = classes!(props.uppercase.then_some("uppercase"), props.class.clone());
    node.add_attribute("class", classes.to_string());
    for child in props.children.iter() {
        node.add_child(child);
    }
    node.into()
}
