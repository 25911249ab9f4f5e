pub(crate) mod button;
pub(crate) mod divider;
pub(crate) mod radio_group;
pub(crate) mod select;
pub(crate) mod text;

pub(crate) use button::*;
pub(crate) use divider::*;
pub(crate) use radio_group::*;
pub(crate) use select::*;
pub(crate) use text::*;
