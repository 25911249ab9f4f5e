pub(crate) mod arrow_button;
pub(crate) mod outside_click;
pub(crate) mod settings_panel;

pub(crate) mod daisy;
